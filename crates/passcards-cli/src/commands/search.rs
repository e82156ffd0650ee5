use passcards_core::{CardApi, CardView, SyncLayer};

use crate::commands::common::print_cards;
use crate::error::CliError;

pub fn run_search<A: CardApi>(
    sync: &SyncLayer<A>,
    term: &str,
    as_json: bool,
) -> Result<(), CliError> {
    let cards = sync.store().filtered(term);
    tracing::debug!(term, matches = cards.len(), "Searched cards");
    print_cards(&cards, &CardView::new(), as_json)
}
