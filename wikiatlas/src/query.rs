use rusty_events::EventId;

/// Builds the SPARQL query asking for the details of every event in `ids`.
///
/// The ids are pasted verbatim into the `VALUES` list, so they have to be
/// prefixed names or IRIs already. Every detail is `OPTIONAL`, an event
/// is never dropped because the graph lacks a date, a place or an article.
pub fn build_details_query(ids: &[EventId]) -> String {
    let values = ids
        .iter()
        .map(EventId::as_str)
        .collect::<Vec<_>>()
        .join(" ");

    format!(
        r#"
    SELECT ?event (CONCAT("wd:", REPLACE(STR(?event), "^.*Q", "Q")) AS ?eventId) ?eventLabel ?eventDescription
           ?startDate ?endDate
           ?location (CONCAT("wd:", REPLACE(STR(?location), "^.*Q", "Q")) AS ?locationId)
           ?locationLabel ?coordinate ?image
           ?eventArticle ?eventImage
    WHERE {{
      VALUES ?event {{ {values} }}

      OPTIONAL {{ ?event wdt:P585 ?startDate. }}       # point in time
      OPTIONAL {{ ?event wdt:P582 ?endDate. }}         # end time
      OPTIONAL {{ ?event wdt:P276 ?location. }}        # location
      OPTIONAL {{ ?event wdt:P18 ?eventImage. }}       # image
      OPTIONAL {{ ?location wdt:P625 ?coordinate. }}   # coordinate location
      OPTIONAL {{ ?location wdt:P18 ?image. }}

      OPTIONAL {{
        ?eventArticle schema:about ?event ;
                      schema:isPartOf <https://en.wikipedia.org/> .
      }}

      SERVICE wikibase:label {{ bd:serviceParam wikibase:language "[AUTO_LANGUAGE],en". }}
    }}
  "#
    )
}
