use passcards_core::clipboard::Clipboard;
use passcards_core::{CardApi, CardView, SyncLayer};

use crate::commands::common::resolve_card;
use crate::error::CliError;

pub fn run_copy<A: CardApi>(
    sync: &SyncLayer<A>,
    id: &str,
    clipboard: &mut impl Clipboard,
) -> Result<(), CliError> {
    let card = resolve_card(id, sync.store())?;
    if let Err(error) = CardView::new().copy_password(&card, clipboard) {
        tracing::warn!(card = %card.id, "Clipboard refused password copy: {}", error);
        return Err(error.into());
    }
    eprintln!("Copied password for '{}'", card.name);
    Ok(())
}
