use passcards_core::{CardApi, CardView, SyncLayer};

use crate::commands::common::resolve_card;
use crate::error::CliError;

pub async fn run_delete<A: CardApi>(sync: &SyncLayer<A>, id: &str) -> Result<(), CliError> {
    let card = resolve_card(id, sync.store())?;
    let target = CardView::new().delete_target(&card);

    sync.delete(&target).await?;
    println!("{target}");
    Ok(())
}
