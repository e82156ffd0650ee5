use passcards_core::{CardApi, CardField, CreationForm, SyncLayer};

use crate::error::CliError;

pub async fn run_add<A: CardApi>(
    sync: &SyncLayer<A>,
    name: String,
    url: String,
    username: String,
    password: String,
) -> Result<(), CliError> {
    let mut form = CreationForm::new();
    form.set_field(CardField::Name, name);
    form.set_field(CardField::Url, url);
    form.set_field(CardField::Username, username);
    form.set_field(CardField::Password, password);
    if form.is_blank() {
        return Err(CliError::EmptyDraft);
    }

    let card = sync.create(&form.submit()).await?;
    println!("{}", card.id);
    Ok(())
}
