//! Built-in demo data: two weeks of daily noon readings for Austin and Chicago.

/// Number of rows inserted by [`SEED_SQL`].
pub const SEED_ROWS: usize = 28;

/// INSERT batch applied when a new store file is created.
pub const SEED_SQL: &str = r#"
INSERT INTO weather_readings (city, ts, temp_c, precip_mm, wind_kph) VALUES
('Austin','2025-07-01T12:00:00Z', 35.2, 0.0, 18.0),
('Austin','2025-07-02T12:00:00Z', 36.0, 0.0, 16.5),
('Austin','2025-07-03T12:00:00Z', 34.8, 0.5, 19.2),
('Austin','2025-07-04T12:00:00Z', 35.5, 0.0, 21.0),
('Austin','2025-07-05T12:00:00Z', 37.1, 0.2, 14.4),
('Austin','2025-07-06T12:00:00Z', 38.3, 0.0, 13.7),
('Austin','2025-07-07T12:00:00Z', 39.0, 0.0, 17.3),
('Austin','2025-07-08T12:00:00Z', 38.4, 1.2, 15.1),
('Austin','2025-07-09T12:00:00Z', 36.8, 0.0, 18.8),
('Austin','2025-07-10T12:00:00Z', 35.9, 0.0, 20.6),
('Austin','2025-07-11T12:00:00Z', 34.1, 2.8, 22.0),
('Austin','2025-07-12T12:00:00Z', 33.7, 0.0, 19.5),
('Austin','2025-07-13T12:00:00Z', 34.9, 0.0, 18.3),
('Austin','2025-07-14T12:00:00Z', 36.2, 0.0, 17.9),
('Chicago','2025-07-01T12:00:00Z', 27.0, 0.4, 20.0),
('Chicago','2025-07-02T12:00:00Z', 26.5, 1.8, 22.5),
('Chicago','2025-07-03T12:00:00Z', 28.1, 0.0, 19.0),
('Chicago','2025-07-04T12:00:00Z', 29.0, 0.0, 18.7),
('Chicago','2025-07-05T12:00:00Z', 30.2, 0.0, 17.9),
('Chicago','2025-07-06T12:00:00Z', 31.1, 0.0, 16.2),
('Chicago','2025-07-07T12:00:00Z', 30.6, 0.6, 15.0),
('Chicago','2025-07-08T12:00:00Z', 29.9, 0.0, 14.3),
('Chicago','2025-07-09T12:00:00Z', 28.7, 3.1, 21.1),
('Chicago','2025-07-10T12:00:00Z', 27.5, 0.0, 20.0),
('Chicago','2025-07-11T12:00:00Z', 26.8, 0.0, 18.2),
('Chicago','2025-07-12T12:00:00Z', 27.3, 0.0, 17.5),
('Chicago','2025-07-13T12:00:00Z', 28.0, 0.0, 16.9),
('Chicago','2025-07-14T12:00:00Z', 29.4, 0.0, 16.1);
"#;
