mod helpers;

use contact_availability::application::services::HolidayService;
use contact_availability::domain::errors::ProviderError;
use helpers::*;
use std::sync::Arc;

fn service(provider: Arc<FakeHolidayProvider>, today: chrono::NaiveDate) -> HolidayService {
    HolidayService::new(provider, Arc::new(FixedClock(today)))
}

fn us_calendar_2025() -> Vec<contact_availability::domain::entities::Holiday> {
    vec![
        holiday(date(2025, 1, 1), "New Year's Day", "US"),
        holiday(date(2025, 7, 4), "Independence Day", "US"),
        holiday(date(2025, 11, 27), "Thanksgiving Day", "US"),
        holiday(date(2025, 12, 25), "Christmas Day", "US"),
    ]
}

fn us_calendar_2026() -> Vec<contact_availability::domain::entities::Holiday> {
    vec![
        holiday(date(2026, 1, 1), "New Year's Day", "US"),
        holiday(date(2026, 1, 19), "Martin Luther King, Jr. Day", "US"),
        holiday(date(2026, 1, 20), "Day After the Window", "US"),
        holiday(date(2026, 2, 16), "Presidents Day", "US"),
    ]
}

#[tokio::test]
async fn test_window_across_new_year_queries_both_years() {
    let provider = Arc::new(
        FakeHolidayProvider::new()
            .with_year(2025, us_calendar_2025())
            .with_year(2026, us_calendar_2026()),
    );
    let service = service(provider.clone(), date(2025, 12, 20));

    let holidays = service.holidays_in_next_30_days("US").await;

    assert_eq!(provider.requested_years(), vec![2025, 2026]);
    let dates: Vec<_> = holidays.iter().map(|h| h.date).collect();
    assert_eq!(
        dates,
        vec![date(2025, 12, 25), date(2026, 1, 1), date(2026, 1, 19)]
    );
}

#[tokio::test]
async fn test_window_within_one_year_queries_once() {
    let provider = Arc::new(FakeHolidayProvider::new().with_year(2025, us_calendar_2025()));
    let service = service(provider.clone(), date(2025, 6, 20));

    let holidays = service.holidays_in_next_30_days("US").await;

    assert_eq!(provider.requested_years(), vec![2025]);
    assert_eq!(holidays.len(), 1);
    assert_eq!(holidays[0].name, "Independence Day");
}

#[tokio::test]
async fn test_window_includes_both_ends() {
    let provider = Arc::new(FakeHolidayProvider::new().with_year(
        2025,
        vec![
            holiday(date(2025, 3, 1), "Window Start", "DE"),
            holiday(date(2025, 3, 31), "Window End", "DE"),
            holiday(date(2025, 4, 1), "Too Late", "DE"),
            holiday(date(2025, 2, 28), "Too Early", "DE"),
        ],
    ));
    let service = service(provider, date(2025, 3, 1));

    let names: Vec<_> = service
        .holidays_in_next_30_days("DE")
        .await
        .into_iter()
        .map(|h| h.name)
        .collect();

    assert_eq!(names, vec!["Window Start", "Window End"]);
}

#[tokio::test]
async fn test_unsorted_upstream_results_are_sorted() {
    let provider = Arc::new(FakeHolidayProvider::new().with_year(
        2025,
        vec![
            holiday(date(2025, 5, 29), "Ascension Day", "FR"),
            holiday(date(2025, 5, 8), "Victory in Europe Day", "FR"),
            holiday(date(2025, 5, 1), "Labour Day", "FR"),
        ],
    ));
    let service = service(provider, date(2025, 4, 30));

    let dates: Vec<_> = service
        .holidays_in_next_30_days("FR")
        .await
        .into_iter()
        .map(|h| h.date)
        .collect();

    assert_eq!(
        dates,
        vec![date(2025, 5, 1), date(2025, 5, 8), date(2025, 5, 29)]
    );
}

#[tokio::test]
async fn test_failed_year_is_omitted_silently() {
    let provider = Arc::new(
        FakeHolidayProvider::new()
            .with_year(2025, us_calendar_2025())
            .failing_year(2026),
    );
    let service = service(provider.clone(), date(2025, 12, 20));

    let holidays = service.holidays_in_next_30_days("US").await;

    assert_eq!(provider.requested_years(), vec![2025, 2026]);
    assert_eq!(holidays.len(), 1);
    assert_eq!(holidays[0].name, "Christmas Day");
}

#[tokio::test]
async fn test_every_year_failing_yields_empty_list() {
    let provider = Arc::new(FakeHolidayProvider::new().failing_year(2025));
    let service = service(provider, date(2025, 8, 1));

    assert!(service.holidays_in_next_30_days("US").await.is_empty());
}

#[tokio::test]
async fn test_holidays_for_year_propagates_errors() {
    let provider = Arc::new(FakeHolidayProvider::new().failing_year(2024));
    let service = service(provider, date(2025, 8, 1));

    let err = service.holidays_for_year(2024, "US").await.unwrap_err();
    assert!(matches!(err, ProviderError::Upstream { status: 503, .. }));
    assert_eq!(
        err.to_string(),
        "Failed to fetch public holidays: HTTP error! status: 503"
    );
}

#[tokio::test]
async fn test_current_year_holidays_use_clock() {
    let provider = Arc::new(FakeHolidayProvider::new().with_year(2025, us_calendar_2025()));
    let service = service(provider.clone(), date(2025, 8, 1));

    let holidays = tokio_test::assert_ok!(service.current_year_holidays("US").await);

    assert_eq!(holidays.len(), 4);
    assert_eq!(service.current_year(), 2025);
    assert_eq!(provider.requested_years(), vec![2025]);
    assert_eq!(provider.requested_codes(), vec!["US".to_string()]);
}

#[tokio::test]
async fn test_holiday_today() {
    let provider = Arc::new(FakeHolidayProvider::new().with_year(2025, us_calendar_2025()));

    let on_holiday = service(provider.clone(), date(2025, 7, 4));
    let found = on_holiday.holiday_today("US").await.unwrap();
    assert_eq!(found.map(|h| h.name), Some("Independence Day".to_string()));

    let ordinary_day = service(provider, date(2025, 7, 5));
    assert!(ordinary_day.holiday_today("US").await.unwrap().is_none());
}

#[tokio::test]
async fn test_holidays_between_covers_every_touched_year() {
    let provider = Arc::new(
        FakeHolidayProvider::new()
            .with_year(2025, us_calendar_2025())
            .with_year(2026, us_calendar_2026()),
    );
    let service = service(provider.clone(), date(2025, 6, 1));

    let holidays = service
        .holidays_between(date(2025, 12, 31), date(2026, 1, 19), "US")
        .await;

    assert_eq!(provider.requested_years(), vec![2025, 2026]);
    let dates: Vec<_> = holidays.iter().map(|h| h.date).collect();
    assert_eq!(dates, vec![date(2026, 1, 1), date(2026, 1, 19)]);
}
