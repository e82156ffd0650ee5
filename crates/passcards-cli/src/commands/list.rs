use passcards_core::{CardApi, CardView, SyncLayer};

use crate::commands::common::print_cards;
use crate::error::CliError;

pub fn run_list<A: CardApi>(sync: &SyncLayer<A>, as_json: bool) -> Result<(), CliError> {
    print_cards(&sync.store().records(), &CardView::new(), as_json)
}
