use passcards_core::{CardApi, CardField, CardView, SyncLayer, UpdateOutcome};

use crate::commands::common::resolve_card;
use crate::error::CliError;

/// Pair each supplied flag with the field it edits.
pub fn edit_changes(
    name: Option<String>,
    url: Option<String>,
    username: Option<String>,
    password: Option<String>,
) -> Vec<(CardField, String)> {
    [
        (CardField::Name, name),
        (CardField::Url, url),
        (CardField::Username, username),
        (CardField::Password, password),
    ]
    .into_iter()
    .filter_map(|(field, value)| value.map(|value| (field, value)))
    .collect()
}

pub async fn run_edit<A: CardApi>(
    sync: &SyncLayer<A>,
    id: &str,
    changes: Vec<(CardField, String)>,
) -> Result<(), CliError> {
    if changes.is_empty() {
        return Err(CliError::NoChanges);
    }

    let card = resolve_card(id, sync.store())?;
    let mut view = CardView::new();
    view.begin_edit(&card);
    for (field, value) in changes {
        view.set_field(field, value);
    }

    let Some(edited) = view.submit_edit() else {
        return Err(CliError::NoChanges);
    };
    if edited == card {
        println!("{}", card.id);
        return Ok(());
    }

    match sync.update(edited).await? {
        UpdateOutcome::Applied => {}
        outcome => tracing::warn!(card = %card.id, ?outcome, "Update was not applied locally"),
    }
    println!("{}", card.id);
    Ok(())
}
