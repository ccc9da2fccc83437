use super::club::get_club_by_id;
use crate::{
    models::{Event, EventChanges, NewEvent},
    schema::events,
    DbConn,
};
use diesel::{prelude::*, sqlite::Sqlite};
use diesel_async::RunQueryDsl;

/// Result of looking up the events hosted by a club.
#[derive(Debug, Clone, PartialEq)]
pub enum ClubEvents {
    Found(Vec<Event>),
    /// The club exists but hosts no events.
    EmptyButExists,
    /// Neither events nor a club with this id exist.
    NotFound,
}

fn non_empty(events: Vec<Event>) -> Option<Vec<Event>> {
    if events.is_empty() {
        None
    } else {
        Some(events)
    }
}

pub async fn list_events(conn: &mut DbConn) -> QueryResult<Vec<Event>> {
    let query = events::table.order(events::id.asc()).select(Event::as_select());
    tracing::debug!(sql = %diesel::debug_query::<Sqlite, _>(&query), "list events");
    query.load(conn).await
}

/// Inserts an event. `club_id` is stored as given, whether or not the club exists.
pub async fn create_event(conn: &mut DbConn, event: NewEvent) -> QueryResult<Event> {
    let query = diesel::insert_into(events::table)
        .values(event)
        .returning(Event::as_returning());
    tracing::debug!(sql = %diesel::debug_query::<Sqlite, _>(&query), "create event");
    query.get_result(conn).await
}

pub async fn get_event_by_id(conn: &mut DbConn, id: i32) -> QueryResult<Option<Event>> {
    tracing::debug!(id, "get event");
    events::table
        .find(id)
        .select(Event::as_select())
        .first(conn)
        .await
        .optional()
}

/// Filters events by `club_id`. When nothing matches, a second, separate read
/// decides whether the club exists at all.
pub async fn get_events_by_club_id(conn: &mut DbConn, club_id: i32) -> QueryResult<ClubEvents> {
    let query = events::table
        .filter(events::club_id.eq(club_id))
        .order(events::id.asc())
        .select(Event::as_select());
    tracing::debug!(sql = %diesel::debug_query::<Sqlite, _>(&query), "events by club");

    if let Some(found) = non_empty(query.load(conn).await?) {
        return Ok(ClubEvents::Found(found));
    }

    Ok(match get_club_by_id(conn, club_id).await? {
        Some(_) => ClubEvents::EmptyButExists,
        None => ClubEvents::NotFound,
    })
}

/// Exact, case-sensitive match on `industry`. `None` when nothing matches.
pub async fn get_events_by_industry(
    conn: &mut DbConn,
    industry: &str,
) -> QueryResult<Option<Vec<Event>>> {
    let query = events::table
        .filter(events::industry.eq(industry))
        .order(events::id.asc())
        .select(Event::as_select());
    tracing::debug!(sql = %diesel::debug_query::<Sqlite, _>(&query), "events by industry");
    Ok(non_empty(query.load(conn).await?))
}

/// Events with `min <= registered_users <= max`. `None` when nothing matches.
pub async fn get_events_by_registered_users(
    conn: &mut DbConn,
    min: i32,
    max: i32,
) -> QueryResult<Option<Vec<Event>>> {
    let query = events::table
        .filter(events::registered_users.between(min, max))
        .order(events::id.asc())
        .select(Event::as_select());
    tracing::debug!(sql = %diesel::debug_query::<Sqlite, _>(&query), "events by registered users");
    Ok(non_empty(query.load(conn).await?))
}

pub async fn update_event_by_id(
    conn: &mut DbConn,
    id: i32,
    changes: EventChanges,
) -> QueryResult<Option<Event>> {
    if changes.is_empty() {
        return get_event_by_id(conn, id).await;
    }

    let query = diesel::update(events::table.find(id))
        .set(changes)
        .returning(Event::as_returning());
    tracing::debug!(sql = %diesel::debug_query::<Sqlite, _>(&query), "update event");
    query.get_result(conn).await.optional()
}

/// Hard-deletes the event and returns the row as it was before removal.
pub async fn delete_event_by_id(conn: &mut DbConn, id: i32) -> QueryResult<Option<Event>> {
    let query = diesel::delete(events::table.find(id)).returning(Event::as_returning());
    tracing::debug!(sql = %diesel::debug_query::<Sqlite, _>(&query), "delete event");
    query.get_result(conn).await.optional()
}
