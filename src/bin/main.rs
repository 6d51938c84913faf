use wikibase_action_api::prelude::*;

#[cfg(not(tarpaulin_include))]
async fn q42_demo(session: &Session) -> Result<(), WikibaseError> {
    // #lizard forgives the complexity
    let q42 = session.get_item("Q42").await?;

    // Get the label and sitelink of Q42
    let q42_label_en = q42.labels().get_lang("en").unwrap_or_default().to_owned();
    let q42_sitelink = q42
        .sitelinks()
        .get_wiki("enwiki")
        .map(|s| s.title().to_owned())
        .unwrap_or_default();
    println!("Q42 '{q42_label_en}' => [[enwiki:{q42_sitelink}]]");

    // What is Q42?
    let class_ids: Vec<String> = q42
        .statements_for("P31")
        .iter()
        .filter_map(|statement| statement.value().data_value())
        .filter_map(|dv| dv.as_entity_id())
        .map(|id| id.to_owned())
        .collect();
    if class_ids.is_empty() {
        return Ok(());
    }
    for class in session.get_items(ItemQuery::Ids(class_ids)).await? {
        let label = class.labels().get_lang("en").unwrap_or_default();
        println!("{q42_label_en} ([[Q42]]) is a {label} ([[{}]])", class.id());
    }
    Ok(())
}

#[cfg(not(tarpaulin_include))]
async fn search_demo(session: &Session) -> Result<(), WikibaseError> {
    let limit = SearchLimit::try_new(5)
        .map_err(|e| WikibaseError::Config(format!("bad search limit: {e}")))?;
    for result in session.find_items("Douglas Adams", limit).await? {
        println!(
            "{}: {} ({})",
            result.id(),
            result.label().unwrap_or_default(),
            result.description().unwrap_or_default()
        );
    }
    Ok(())
}

#[cfg(not(tarpaulin_include))]
#[tokio::main]
async fn main() -> Result<(), WikibaseError> {
    let session = Session::wikidata()?;
    session.check_health().await?;

    q42_demo(&session).await?;

    search_demo(&session).await?;

    for warning in session.take_warnings().await {
        println!("Warning from {}: {}", warning.module(), warning.text());
    }
    Ok(())
}
