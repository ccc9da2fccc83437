use crate::{
    models::{Club, ClubChanges, NewClub},
    schema::clubs,
    DbConn,
};
use diesel::{prelude::*, sqlite::Sqlite};
use diesel_async::RunQueryDsl;

pub async fn list_clubs(conn: &mut DbConn) -> QueryResult<Vec<Club>> {
    let query = clubs::table.order(clubs::id.asc()).select(Club::as_select());
    tracing::debug!(sql = %diesel::debug_query::<Sqlite, _>(&query), "list clubs");
    query.load(conn).await
}

pub async fn create_club(conn: &mut DbConn, club: NewClub) -> QueryResult<Club> {
    let query = diesel::insert_into(clubs::table)
        .values(club)
        .returning(Club::as_returning());
    tracing::debug!(sql = %diesel::debug_query::<Sqlite, _>(&query), "create club");
    query.get_result(conn).await
}

pub async fn get_club_by_id(conn: &mut DbConn, id: i32) -> QueryResult<Option<Club>> {
    tracing::debug!(id, "get club");
    clubs::table
        .find(id)
        .select(Club::as_select())
        .first(conn)
        .await
        .optional()
}

/// Overwrites the columns present in `changes` and returns the updated row,
/// or `None` if no club has this id.
pub async fn update_club_by_id(
    conn: &mut DbConn,
    id: i32,
    changes: ClubChanges,
) -> QueryResult<Option<Club>> {
    // an empty SET clause is a query builder error
    if changes.is_empty() {
        return get_club_by_id(conn, id).await;
    }

    let query = diesel::update(clubs::table.find(id))
        .set(changes)
        .returning(Club::as_returning());
    tracing::debug!(sql = %diesel::debug_query::<Sqlite, _>(&query), "update club");
    query.get_result(conn).await.optional()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dao::test_pool;

    fn chess_club() -> NewClub {
        NewClub {
            name: "Chess Club".to_string(),
            industry: "Games".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn list_is_empty_without_clubs() {
        let pool = test_pool().await;
        let conn = &mut pool.get().await.unwrap();

        assert!(list_clubs(conn).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn create_assigns_increasing_ids() {
        let pool = test_pool().await;
        let conn = &mut pool.get().await.unwrap();

        let first = create_club(conn, chess_club()).await.unwrap();
        let second = create_club(conn, NewClub::default()).await.unwrap();
        let third = create_club(conn, chess_club()).await.unwrap();

        assert!(first.id < second.id);
        assert!(second.id < third.id);
        assert_eq!(second.name, "None");
        assert_eq!(second.registered_users, 0);

        let ids: Vec<i32> = list_clubs(conn).await.unwrap().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![first.id, second.id, third.id]);
    }

    #[tokio::test]
    async fn get_returns_created_club() {
        let pool = test_pool().await;
        let conn = &mut pool.get().await.unwrap();

        let created = create_club(conn, chess_club()).await.unwrap();
        let fetched = get_club_by_id(conn, created.id).await.unwrap();

        assert_eq!(fetched, Some(created));
        assert_eq!(get_club_by_id(conn, 999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn update_only_touches_given_fields() {
        let pool = test_pool().await;
        let conn = &mut pool.get().await.unwrap();

        let created = create_club(conn, chess_club()).await.unwrap();
        let updated = update_club_by_id(
            conn,
            created.id,
            ClubChanges {
                email: Some("chess@example.com".to_string()),
                registered_users: Some(12),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Chess Club");
        assert_eq!(updated.industry, "Games");
        assert_eq!(updated.email, "chess@example.com");
        assert_eq!(updated.registered_users, 12);
        assert_eq!(get_club_by_id(conn, created.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn update_missing_club_is_none() {
        let pool = test_pool().await;
        let conn = &mut pool.get().await.unwrap();

        let changes = ClubChanges {
            name: Some("Ghost".to_string()),
            ..Default::default()
        };
        assert_eq!(update_club_by_id(conn, 7, changes).await.unwrap(), None);
        assert_eq!(
            update_club_by_id(conn, 7, ClubChanges::default()).await.unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn empty_update_returns_unchanged_club() {
        let pool = test_pool().await;
        let conn = &mut pool.get().await.unwrap();

        let created = create_club(conn, chess_club()).await.unwrap();
        let updated = update_club_by_id(conn, created.id, ClubChanges::default())
            .await
            .unwrap();

        assert_eq!(updated, Some(created));
    }
}
