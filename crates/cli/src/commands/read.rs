//! Retrieve and clear a mailbox.
//!
//! Shows every unexpired message waiting for the username, oldest first.
//! This is a consuming read: the server deletes the mailbox as part of it,
//! so running `read` twice in a row reports nothing waiting.

use anyhow::Result;
use tabled::{Table, Tabled, settings::Style};

use crate::{api::Api, config::Config, ui};

#[derive(Tabled)]
struct MessageRow {
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Message")]
    text: String,
}

pub async fn run(config: &Config, username: &str) -> Result<()> {
    let api = Api::new(config.api_url.to_string());

    let messages = ui::spin(
        "Fetching messages...",
        api.retrieve_messages(username),
    )
    .await?;

    let rows: Vec<MessageRow> = messages
        .into_iter()
        .map(|m| MessageRow {
            id: m.id,
            text: m.text,
        })
        .collect();

    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{table}");

    Ok(())
}
