//! Command handlers.  Each one is a straight line from input to a core
//! call to printed output.

use std::path::Path;

use anyhow::{bail, Context};

use cardbox_scan::{decode_image_file, ImageFile};
use cardbox_shared::{format_for_display, validate_payload, PayloadKind};
use cardbox_store::{CardDraft, CardPatch, CardRecord, CardStore};

pub async fn scan(store: &CardStore, image: &Path, save_as: Option<String>) -> anyhow::Result<()> {
    let file = ImageFile::from_path(image)
        .with_context(|| format!("could not read {}", image.display()))?;

    let Some(code) = decode_image_file(&file).await? else {
        println!("No code found");
        return Ok(());
    };

    let kind = PayloadKind::from(code.kind);
    println!("{}", format_for_display(&code.payload, kind));

    if let Some(store_name) = save_as {
        let draft = CardDraft {
            store_name: Some(store_name),
            payload_kind: Some(kind),
            ..CardDraft::new(code.payload)
        };
        let card = store.save(draft).await.context("failed to save card")?;
        println!("Saved card {}", card.id);
    }

    Ok(())
}

pub async fn add(store: &CardStore, store_name: String, payload: String) -> anyhow::Result<()> {
    let payload = validate_payload(&payload, PayloadKind::Manual)?;

    let draft = CardDraft {
        store_name: Some(store_name),
        ..CardDraft::new(payload)
    };
    let card = store.save(draft).await.context("failed to save card")?;
    println!("Saved card {}", card.id);
    Ok(())
}

pub async fn list(store: &CardStore) -> anyhow::Result<()> {
    print_cards(&store.list_all().await);
    Ok(())
}

pub async fn search(store: &CardStore, query: &str) -> anyhow::Result<()> {
    print_cards(&store.search(query).await);
    Ok(())
}

pub async fn show(store: &CardStore, id: &str) -> anyhow::Result<()> {
    let Some(card) = store.get(id).await else {
        bail!("no card with id {id}");
    };

    println!("id:         {}", card.id);
    println!("store:      {}", card.store_name);
    println!(
        "code:       {}",
        format_for_display(&card.payload, card.payload_kind)
    );
    println!("kind:       {}", card.payload_kind);
    println!("created at: {}", card.created_at.to_rfc3339());
    println!("updated at: {}", card.updated_at.to_rfc3339());
    Ok(())
}

pub async fn edit(
    store: &CardStore,
    id: &str,
    store_name: Option<String>,
    payload: Option<String>,
) -> anyhow::Result<()> {
    if store_name.is_none() && payload.is_none() {
        bail!("nothing to change: pass --store-name and/or --payload");
    }

    // Validate a replacement payload against the card's existing kind.
    let payload = match payload {
        Some(raw) => {
            let card = store.get(id).await.ok_or_else(|| {
                anyhow::anyhow!("no card with id {id}")
            })?;
            Some(validate_payload(&raw, card.payload_kind)?)
        }
        None => None,
    };

    let patch = CardPatch {
        store_name,
        payload,
        payload_kind: None,
    };
    let card = store.update(id, patch).await.context("failed to update card")?;
    println!("Updated card {}", card.id);
    Ok(())
}

pub async fn rm(store: &CardStore, id: &str) -> anyhow::Result<()> {
    store.delete(id).await.context("failed to delete card")?;
    println!("Deleted card {id}");
    Ok(())
}

pub async fn clear(store: &CardStore, yes: bool) -> anyhow::Result<()> {
    if !yes {
        bail!("refusing to delete every card without --yes");
    }
    store.clear_all().await.context("failed to clear cards")?;
    println!("All cards deleted");
    Ok(())
}

fn print_cards(cards: &[CardRecord]) {
    if cards.is_empty() {
        println!("No cards");
        return;
    }
    for card in cards {
        println!(
            "{}  {:20}  {}",
            card.id,
            card.store_name,
            format_for_display(&card.payload, card.payload_kind)
        );
    }
}
