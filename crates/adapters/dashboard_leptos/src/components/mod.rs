mod state_item;
mod switch_card;

pub use state_item::StateItem;
pub use switch_card::SwitchCardView;
