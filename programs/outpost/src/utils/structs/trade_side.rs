/// Side of a pass trade, deciding which supply levels the curve integrates
/// over.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TradeSide {
    Buy,
    Sell,
}
