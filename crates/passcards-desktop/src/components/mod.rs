//! UI Components

mod card_item;
mod card_list;
mod new_card_form;
mod search_bar;

pub use card_item::CardItem;
pub use card_list::CardList;
pub use new_card_form::NewCardForm;
pub use search_bar::SearchBar;
