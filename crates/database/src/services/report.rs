use models::{Cell, Report};
use sea_orm::{
    ConnectionTrait, DatabaseConnection, DbErr, FromQueryResult, QueryResult, Statement,
};

/// The table the hotel listing reads, and whose columns become its headers
pub const HOTEL_TABLE: &str = "Szalloda";

const HOTELS_SQL: &str = "SELECT * FROM Szalloda";

const HOTELS_SEARCH_SQL: &str = "SELECT * FROM Szalloda WHERE szalloda LIKE ?";

const ROOM_COUNT_SQL: &str = "SELECT Szalloda.szalloda AS hotel, COUNT(Szoba.ID) AS room_count \
     FROM Szoba JOIN Szalloda ON Szoba.szallodaID = Szalloda.ID \
     GROUP BY Szalloda.szalloda";

const AVERAGE_BEDS_SQL: &str = "SELECT Szalloda.szalloda AS hotel, AVG(Szoba.agy) AS average_beds \
     FROM Szalloda INNER JOIN Szoba ON Szalloda.ID = Szoba.szallodaID \
     GROUP BY Szalloda.ID \
     ORDER BY average_beds";

const RESERVATIONS_SQL: &str = "SELECT Szalloda.szalloda AS hotel_name, Foglalas.ID AS reservation_id, \
     Foglalas.DatumKezd AS start_date, Foglalas.DatumVeg AS end_date \
     FROM Szalloda \
     INNER JOIN Szoba ON Szalloda.ID = Szoba.szallodaID \
     INNER JOIN szoba_foglalas ON Szoba.ID = szoba_foglalas.szobaID \
     INNER JOIN Foglalas ON szoba_foglalas.foglalasID = Foglalas.ID \
     ORDER BY Szalloda.szalloda, Foglalas.DatumKezd";

// `tipus` is not aggregated, so SQLite returns the type of an arbitrary
// restaurant from each hotel's group.
const RESTAURANT_TYPES_SQL: &str = "SELECT Szalloda.szalloda AS hotel, etterem.tipus AS restaurant_type \
     FROM Szalloda, etterem, szalloda_etterem \
     WHERE Szalloda.ID = szalloda_etterem.szallodaID AND etterem.id = szalloda_etterem.etteremID \
     GROUP BY Szalloda.ID";

const RESERVATION_COUNTS_SQL: &str = "SELECT Szalloda.szalloda AS hotel_name, COUNT(Foglalas.ID) AS reservation_count \
     FROM Foglalas \
     JOIN szoba_foglalas ON Foglalas.ID = szoba_foglalas.foglalasID \
     JOIN Szoba ON szoba_foglalas.szobaID = Szoba.ID \
     JOIN Szalloda ON Szoba.szallodaID = Szalloda.ID \
     GROUP BY Szalloda.szalloda \
     ORDER BY reservation_count DESC";

#[derive(Debug, FromQueryResult)]
struct RoomCountRow {
    hotel: Option<String>,
    room_count: i64,
}

#[derive(Debug, FromQueryResult)]
struct AverageBedsRow {
    hotel: Option<String>,
    average_beds: Option<f64>,
}

#[derive(Debug, FromQueryResult)]
struct ReservationRow {
    hotel_name: Option<String>,
    reservation_id: i64,
    start_date: Option<String>,
    end_date: Option<String>,
}

#[derive(Debug, FromQueryResult)]
struct RestaurantTypeRow {
    hotel: Option<String>,
    restaurant_type: Option<String>,
}

#[derive(Debug, FromQueryResult)]
struct ReservationCountRow {
    hotel_name: Option<String>,
    reservation_count: i64,
}

/// A column of a table as the SQLite catalog describes it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    pub name: String,
    pub declared_type: String,
}

pub struct ReportService;

impl ReportService {
    /// List every hotel, or only those whose name contains `search`
    ///
    /// The term is wrapped in `%` and bound as a LIKE pattern, so `%` and `_`
    /// inside it keep their wildcard meaning. An empty term lists everything.
    pub async fn hotels(db: &DatabaseConnection, search: Option<&str>) -> Result<Report, DbErr> {
        let backend = db.get_database_backend();

        let statement = match search.filter(|term| !term.is_empty()) {
            Some(term) => Statement::from_sql_and_values(
                backend,
                HOTELS_SEARCH_SQL,
                [format!("%{term}%").into()],
            ),
            None => Statement::from_string(backend, HOTELS_SQL),
        };
        let results = db.query_all(statement).await?;

        // Read the catalog on every call so the headers track the live schema
        let headers: Vec<String> = Self::table_columns(db, HOTEL_TABLE)
            .await?
            .into_iter()
            .map(|column| column.name)
            .collect();

        let rows = results
            .iter()
            .map(|row| read_row(row, headers.len()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Report::new(headers, rows))
    }

    /// Count the rooms of every hotel that has at least one
    pub async fn room_count_per_hotel(db: &DatabaseConnection) -> Result<Report, DbErr> {
        let rows: Vec<Vec<Cell>> =
            RoomCountRow::find_by_statement(Self::statement(db, ROOM_COUNT_SQL))
                .all(db)
                .await?
                .into_iter()
                .map(|row| vec![row.hotel.into(), row.room_count.into()])
                .collect();

        Ok(Report::new(["Hotel", "Room Count"], rows))
    }

    /// Average bed count per room for each hotel, lowest average first
    pub async fn average_beds_per_room(db: &DatabaseConnection) -> Result<Report, DbErr> {
        let rows: Vec<Vec<Cell>> =
            AverageBedsRow::find_by_statement(Self::statement(db, AVERAGE_BEDS_SQL))
                .all(db)
                .await?
                .into_iter()
                .map(|row| vec![row.hotel.into(), row.average_beds.into()])
                .collect();

        Ok(Report::new(["Hotel", "Average Beds"], rows))
    }

    /// Every reservation reachable from a hotel through its rooms
    pub async fn reservations_per_hotel(db: &DatabaseConnection) -> Result<Report, DbErr> {
        let rows: Vec<Vec<Cell>> =
            ReservationRow::find_by_statement(Self::statement(db, RESERVATIONS_SQL))
                .all(db)
                .await?
                .into_iter()
                .map(|row| {
                    vec![
                        row.hotel_name.into(),
                        row.reservation_id.into(),
                        row.start_date.into(),
                        row.end_date.into(),
                    ]
                })
                .collect();

        Ok(Report::new(
            ["Hotel Name", "Reservation ID", "Start Date", "End Date"],
            rows,
        ))
    }

    /// One restaurant type for each hotel that has restaurants
    pub async fn restaurant_types_per_hotel(db: &DatabaseConnection) -> Result<Report, DbErr> {
        let rows: Vec<Vec<Cell>> =
            RestaurantTypeRow::find_by_statement(Self::statement(db, RESTAURANT_TYPES_SQL))
                .all(db)
                .await?
                .into_iter()
                .map(|row| vec![row.hotel.into(), row.restaurant_type.into()])
                .collect();

        Ok(Report::new(["Hotel", "Restaurant Type"], rows))
    }

    /// Reservation count per hotel, busiest hotel first
    pub async fn reservation_counts_per_hotel(db: &DatabaseConnection) -> Result<Report, DbErr> {
        let rows: Vec<Vec<Cell>> =
            ReservationCountRow::find_by_statement(Self::statement(db, RESERVATION_COUNTS_SQL))
                .all(db)
                .await?
                .into_iter()
                .map(|row| vec![row.hotel_name.into(), row.reservation_count.into()])
                .collect();

        Ok(Report::new(["Hotel Name", "Reservation Count"], rows))
    }

    /// Columns of `table` in declaration order, empty if the table is missing
    pub async fn table_columns<C: ConnectionTrait>(
        db: &C,
        table: &str,
    ) -> Result<Vec<ColumnInfo>, DbErr> {
        let backend = db.get_database_backend();

        // PRAGMA arguments cannot be bound, so the name goes in as a quoted literal
        let sql = format!("PRAGMA table_info('{}')", table.replace('\'', "''"));

        db.query_all(Statement::from_string(backend, sql))
            .await?
            .iter()
            .map(|row| -> Result<ColumnInfo, DbErr> {
                Ok(ColumnInfo {
                    name: row.try_get("", "name")?,
                    declared_type: row.try_get("", "type")?,
                })
            })
            .collect()
    }

    fn statement(db: &DatabaseConnection, sql: &str) -> Statement {
        Statement::from_string(db.get_database_backend(), sql)
    }
}

/// Read the first `width` columns of a row whose shape is only known at runtime
fn read_row(row: &QueryResult, width: usize) -> Result<Vec<Cell>, DbErr> {
    (0..width).map(|idx| read_cell(row, idx)).collect()
}

/// SQLite types values, not columns, so try each storage class in turn
fn read_cell(row: &QueryResult, idx: usize) -> Result<Cell, DbErr> {
    if let Ok(value) = row.try_get_by_index::<Option<i64>>(idx) {
        return Ok(value.into());
    }
    if let Ok(value) = row.try_get_by_index::<Option<f64>>(idx) {
        return Ok(value.into());
    }
    if let Ok(value) = row.try_get_by_index::<Option<String>>(idx) {
        return Ok(value.into());
    }
    row.try_get_by_index::<Option<Vec<u8>>>(idx).map(Cell::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{
        hotel, link_restaurant, link_room, reservation, restaurant, room, seeded_db,
    };

    #[tokio::test]
    async fn hotels_headers_come_from_catalog() {
        let db = seeded_db().await;
        hotel(&db, 1, "Lotus").await;
        hotel(&db, 2, "Aurora").await;

        let report = ReportService::hotels(&db, None).await.unwrap();

        assert_eq!(report.headers, vec!["ID", "szalloda"]);
        assert_eq!(report.rows.len(), 2);
        for row in &report.rows {
            assert_eq!(row.len(), report.headers.len());
        }
        assert!(report.rows.contains(&vec![Cell::Integer(1), Cell::from("Lotus")]));
    }

    #[tokio::test]
    async fn empty_search_matches_full_listing() {
        let db = seeded_db().await;
        hotel(&db, 1, "Lotus").await;
        hotel(&db, 2, "Aurora").await;

        let all = ReportService::hotels(&db, None).await.unwrap();
        let empty = ReportService::hotels(&db, Some("")).await.unwrap();

        assert_eq!(all.rows.len(), empty.rows.len());
    }

    #[tokio::test]
    async fn search_filters_by_substring() {
        let db = seeded_db().await;
        hotel(&db, 1, "Lotus Garden").await;
        hotel(&db, 2, "Aurora").await;
        hotel(&db, 3, "Blue Lotus").await;

        let report = ReportService::hotels(&db, Some("Lotus")).await.unwrap();

        assert_eq!(report.rows.len(), 2);
        let names = report.column("szalloda").unwrap();
        assert!(names
            .iter()
            .all(|name| name.as_str().is_some_and(|n| n.contains("Lotus"))));
    }

    #[tokio::test]
    async fn search_ignores_ascii_case() {
        let db = seeded_db().await;
        hotel(&db, 1, "Lotus").await;
        hotel(&db, 2, "Aurora").await;

        let report = ReportService::hotels(&db, Some("lotus")).await.unwrap();

        assert_eq!(
            report.rows,
            vec![vec![Cell::Integer(1), Cell::from("Lotus")]]
        );
    }

    #[tokio::test]
    async fn hotels_decode_each_storage_class() {
        let db = seeded_db().await;
        for sql in [
            "ALTER TABLE Szalloda ADD COLUMN rating REAL",
            "ALTER TABLE Szalloda ADD COLUMN code INTEGER",
            "ALTER TABLE Szalloda ADD COLUMN logo BLOB",
            "INSERT INTO Szalloda (ID, szalloda, rating, code, logo) \
             VALUES (1, 'Lotus', 4.5, 'text-in-int', X'0102')",
            "INSERT INTO Szalloda (ID, szalloda) VALUES (2, 'Aurora')",
        ] {
            db.execute_unprepared(sql).await.unwrap();
        }

        let report = ReportService::hotels(&db, None).await.unwrap();

        assert_eq!(report.headers, vec!["ID", "szalloda", "rating", "code", "logo"]);
        assert!(report.rows.contains(&vec![
            Cell::Integer(1),
            Cell::from("Lotus"),
            Cell::Real(4.5),
            Cell::from("text-in-int"),
            Cell::Blob(vec![1, 2]),
        ]));
        assert!(report.rows.contains(&vec![
            Cell::Integer(2),
            Cell::from("Aurora"),
            Cell::Null,
            Cell::Null,
            Cell::Null,
        ]));
    }

    #[tokio::test]
    async fn search_passes_wildcards_through() {
        let db = seeded_db().await;
        hotel(&db, 1, "Lotus").await;
        hotel(&db, 2, "Aurora").await;

        let report = ReportService::hotels(&db, Some("L_tus")).await.unwrap();
        assert_eq!(report.rows.len(), 1);

        let report = ReportService::hotels(&db, Some("%")).await.unwrap();
        assert_eq!(report.rows.len(), 2);
    }

    #[tokio::test]
    async fn room_counts_sum_to_room_total() {
        let db = seeded_db().await;
        hotel(&db, 1, "Lotus").await;
        hotel(&db, 2, "Aurora").await;
        hotel(&db, 3, "Empty").await;
        room(&db, 10, 1, 2).await;
        room(&db, 11, 1, 3).await;
        room(&db, 12, 2, 1).await;

        let report = ReportService::room_count_per_hotel(&db).await.unwrap();

        assert_eq!(report.headers, vec!["Hotel", "Room Count"]);
        // Hotels without rooms drop out of the inner join
        assert_eq!(report.rows.len(), 2);
        let total: i64 = report
            .column("Room Count")
            .unwrap()
            .iter()
            .filter_map(|cell| cell.as_i64())
            .sum();
        assert_eq!(total, 3);
    }

    #[tokio::test]
    async fn average_beds_ascending() {
        let db = seeded_db().await;
        hotel(&db, 1, "Lotus").await;
        hotel(&db, 2, "Aurora").await;
        room(&db, 10, 1, 2).await;
        room(&db, 20, 2, 4).await;
        room(&db, 21, 2, 1).await;

        let report = ReportService::average_beds_per_room(&db).await.unwrap();

        assert_eq!(report.headers, vec!["Hotel", "Average Beds"]);
        assert_eq!(
            report.rows,
            vec![
                vec![Cell::from("Lotus"), Cell::Real(2.0)],
                vec![Cell::from("Aurora"), Cell::Real(2.5)],
            ]
        );
    }

    #[tokio::test]
    async fn single_reservation_end_to_end() {
        let db = seeded_db().await;
        hotel(&db, 1, "Lotus").await;
        room(&db, 10, 1, 2).await;
        reservation(&db, 100, "2024-01-01", "2024-01-03").await;
        link_room(&db, 10, 100).await;

        let report = ReportService::reservations_per_hotel(&db).await.unwrap();

        assert_eq!(
            report.headers,
            vec!["Hotel Name", "Reservation ID", "Start Date", "End Date"]
        );
        assert_eq!(
            report.rows,
            vec![vec![
                Cell::from("Lotus"),
                Cell::Integer(100),
                Cell::from("2024-01-01"),
                Cell::from("2024-01-03"),
            ]]
        );
    }

    #[tokio::test]
    async fn reservations_ordered_by_hotel_then_start() {
        let db = seeded_db().await;
        hotel(&db, 1, "Lotus").await;
        hotel(&db, 2, "Aurora").await;
        room(&db, 10, 1, 2).await;
        room(&db, 20, 2, 2).await;
        reservation(&db, 100, "2024-03-01", "2024-03-02").await;
        reservation(&db, 101, "2024-01-01", "2024-01-05").await;
        reservation(&db, 102, "2024-02-01", "2024-02-03").await;
        link_room(&db, 10, 100).await;
        link_room(&db, 10, 101).await;
        link_room(&db, 20, 102).await;

        let report = ReportService::reservations_per_hotel(&db).await.unwrap();
        let ids: Vec<i64> = report
            .column("Reservation ID")
            .unwrap()
            .iter()
            .filter_map(|cell| cell.as_i64())
            .collect();

        assert_eq!(ids, vec![102, 101, 100]);
    }

    #[tokio::test]
    async fn restaurant_type_one_per_hotel() {
        let db = seeded_db().await;
        hotel(&db, 1, "Lotus").await;
        hotel(&db, 2, "Aurora").await;
        restaurant(&db, 1, "Italian").await;
        restaurant(&db, 2, "Sushi").await;
        link_restaurant(&db, 1, 1).await;
        link_restaurant(&db, 1, 2).await;

        let report = ReportService::restaurant_types_per_hotel(&db).await.unwrap();

        assert_eq!(report.headers, vec!["Hotel", "Restaurant Type"]);
        assert_eq!(report.rows.len(), 1);
        let kind = report.rows[0][1].as_str().unwrap();
        assert!(kind == "Italian" || kind == "Sushi");
    }

    #[tokio::test]
    async fn reservation_counts_descending() {
        let db = seeded_db().await;
        hotel(&db, 1, "Lotus").await;
        hotel(&db, 2, "Aurora").await;
        room(&db, 10, 1, 2).await;
        room(&db, 20, 2, 2).await;
        for id in 100..103 {
            reservation(&db, id, "2024-01-01", "2024-01-02").await;
            link_room(&db, 20, id).await;
        }
        reservation(&db, 200, "2024-01-01", "2024-01-02").await;
        link_room(&db, 10, 200).await;

        let report = ReportService::reservation_counts_per_hotel(&db).await.unwrap();

        assert_eq!(report.headers, vec!["Hotel Name", "Reservation Count"]);
        assert_eq!(
            report.rows,
            vec![
                vec![Cell::from("Aurora"), Cell::Integer(3)],
                vec![Cell::from("Lotus"), Cell::Integer(1)],
            ]
        );
    }

    #[tokio::test]
    async fn table_columns_for_missing_table_is_empty() {
        let db = seeded_db().await;
        let columns = ReportService::table_columns(&db, "Nope").await.unwrap();
        assert!(columns.is_empty());
    }

    #[tokio::test]
    async fn hotels_without_table_is_an_error() {
        let db = crate::db::create_connection(&crate::db::DatabaseConfig::in_memory())
            .await
            .unwrap();

        assert!(ReportService::hotels(&db, None).await.is_err());
        assert!(ReportService::room_count_per_hotel(&db).await.is_err());
    }
}
