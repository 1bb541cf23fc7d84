mod common;

use anyhow::Result;
use common::{date, seed_sample, service_entry, test_service};
use servicebook::application::{AppError, ReportFilter};
use servicebook::domain::{
    BalancePeriod, EntryDraft, PaymentStatus, ServiceCategory, ValidationError,
    compute_daily_balances, filter_by_date, summarize,
};

#[tokio::test]
async fn test_daily_balance_report() -> Result<()> {
    let (service, _temp) = test_service().await?;
    seed_sample(&service).await?;

    let report = service
        .balance_report(ReportFilter::default(), BalancePeriod::Daily)
        .await?;

    assert_eq!(report.rows.len(), 2);
    assert_eq!(report.rows[0].date, date("2024-01-01"));
    assert_eq!(report.rows[0].opening_balance, 0);
    assert_eq!(report.rows[0].closing_balance, 650);
    assert_eq!(report.rows[1].date, date("2024-01-02"));
    assert_eq!(report.rows[1].opening_balance, 650);
    assert_eq!(report.rows[1].closing_balance, 830);
    assert_eq!(report.closing_balance(), 830);

    // The report is the pure computation over load_all()
    let records = service.load_all().await?;
    assert_eq!(report.rows, compute_daily_balances(&records));

    Ok(())
}

#[tokio::test]
async fn test_balances_sorted_by_date_not_insertion() -> Result<()> {
    let (service, _temp) = test_service().await?;

    service.append(service_entry("2024-01-10", 100, 0, 100)).await?;
    service.append(service_entry("2024-01-02", 50, 20, 50)).await?;
    service.append(service_entry("2024-01-05", 0, 10, 0)).await?;

    let report = service
        .balance_report(ReportFilter::default(), BalancePeriod::Daily)
        .await?;
    let dates: Vec<_> = report.rows.iter().map(|r| r.date).collect();
    assert_eq!(
        dates,
        vec![date("2024-01-02"), date("2024-01-05"), date("2024-01-10")]
    );
    assert_eq!(report.rows[0].closing_balance, 30);
    assert_eq!(report.rows[1].closing_balance, 20);
    assert_eq!(report.rows[2].closing_balance, 120);

    Ok(())
}

#[tokio::test]
async fn test_monthly_balance_report() -> Result<()> {
    let (service, _temp) = test_service().await?;

    service.append(service_entry("2024-01-15", 1000, 200, 1000)).await?;
    service.append(service_entry("2024-01-31", 500, 0, 250)).await?;
    service
        .append(EntryDraft::expense(date("2024-02-03"), 300).build()?)
        .await?;

    let report = service
        .balance_report(ReportFilter::default(), BalancePeriod::Monthly)
        .await?;

    assert_eq!(report.rows.len(), 2);
    assert_eq!(report.rows[0].date, date("2024-01-01"));
    assert_eq!(report.rows[0].received, 1250);
    assert_eq!(report.rows[0].expense, 200);
    assert_eq!(report.rows[0].closing_balance, 1050);
    assert_eq!(report.rows[1].date, date("2024-02-01"));
    assert_eq!(report.rows[1].opening_balance, 1050);
    assert_eq!(report.rows[1].closing_balance, 750);

    Ok(())
}

#[tokio::test]
async fn test_summary_report_with_date_filter() -> Result<()> {
    let (service, _temp) = test_service().await?;
    seed_sample(&service).await?;

    let all = service.summary_report(ReportFilter::default()).await?;
    assert_eq!(all.summary.entry_count, 3);
    assert_eq!(all.summary.total_income, 1000);
    assert_eq!(all.summary.total_expense, 170);
    assert_eq!(all.summary.total_received, 700);
    assert_eq!(all.summary.total_pending, 300);
    assert_eq!(all.summary.closing_balance, 830);

    let day_two = service
        .summary_report(ReportFilter::between(date("2024-01-02"), date("2024-01-02")))
        .await?;
    assert_eq!(day_two.summary.entry_count, 1);
    assert_eq!(day_two.summary.total_income, 200);
    // Closing balance only covers the filtered slice
    assert_eq!(day_two.summary.closing_balance, 180);

    Ok(())
}

#[tokio::test]
async fn test_ranged_reports_match_filter_by_date() -> Result<()> {
    let (service, _temp) = test_service().await?;
    seed_sample(&service).await?;
    service.append(service_entry("2024-01-05", 400, 10, 100)).await?;
    service.append(service_entry("2024-01-09", 900, 0, 900)).await?;

    let (from, to) = (date("2024-01-02"), date("2024-01-05"));
    let expected = filter_by_date(&service.load_all().await?, from, to)?;
    assert_eq!(expected.len(), 2);

    let filter = ReportFilter::between(from, to);
    let summary = service.summary_report(filter).await?;
    assert_eq!(summary.summary, summarize(&expected));

    let balances = service.balance_report(filter, BalancePeriod::Daily).await?;
    assert_eq!(balances.rows, compute_daily_balances(&expected));
    assert_eq!(balances.closing_balance(), 270);

    Ok(())
}

#[tokio::test]
async fn test_summary_of_empty_range_is_zero() -> Result<()> {
    let (service, _temp) = test_service().await?;
    seed_sample(&service).await?;

    let report = service
        .summary_report(ReportFilter {
            from: Some(date("2030-01-01")),
            to: None,
        })
        .await?;

    assert_eq!(report.summary.entry_count, 0);
    assert_eq!(report.summary.total_income, 0);
    assert_eq!(report.summary.closing_balance, 0);

    Ok(())
}

#[tokio::test]
async fn test_reports_reject_inverted_range() -> Result<()> {
    let (service, _temp) = test_service().await?;
    let filter = ReportFilter::between(date("2024-02-01"), date("2024-01-01"));

    let err = service.summary_report(filter).await.unwrap_err();
    assert!(matches!(
        err,
        AppError::Validation(ValidationError::InvalidRange { .. })
    ));

    let err = service
        .balance_report(filter, BalancePeriod::Weekly)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::Validation(ValidationError::InvalidRange { .. })
    ));

    Ok(())
}

#[tokio::test]
async fn test_category_and_pending_reports() -> Result<()> {
    let (service, _temp) = test_service().await?;

    service
        .record_entry(
            EntryDraft::service(date("2024-04-01"), ServiceCategory::Passport)
                .with_customer("Nadia")
                .with_income(150000)
                .with_expense(110000)
                .with_payment(PaymentStatus::Partial, 100000),
        )
        .await?;
    service
        .record_entry(
            EntryDraft::service(date("2024-04-02"), ServiceCategory::BirthCertificate)
                .with_customer("Tom")
                .with_applications(3)
                .per_application()
                .with_income(5000)
                .with_payment(PaymentStatus::Pending, 0),
        )
        .await?;
    service
        .record_entry(EntryDraft::expense(date("2024-04-02"), 4000))
        .await?;

    let categories = service.category_report(ReportFilter::default()).await?;
    assert_eq!(categories.categories.len(), 2);
    assert_eq!(categories.categories[0].category, ServiceCategory::Passport);
    assert_eq!(categories.categories[1].applications, 3);
    assert_eq!(categories.categories[1].income, 15000);
    assert_eq!(categories.total_income, 165000);
    assert_eq!(categories.total_profit, 55000);

    let pending = service.pending_report(ReportFilter::default()).await?;
    assert_eq!(pending.customers.len(), 2);
    assert_eq!(pending.customers[0].customer, "Nadia");
    assert_eq!(pending.customers[0].pending, 50000);
    assert_eq!(pending.customers[1].customer, "Tom");
    assert_eq!(pending.customers[1].pending, 15000);
    assert_eq!(pending.total_pending, 65000);

    Ok(())
}

#[tokio::test]
async fn test_dashboard_matches_individual_reports() -> Result<()> {
    let (service, _temp) = test_service().await?;
    seed_sample(&service).await?;
    let filter = ReportFilter::default();

    let dashboard = service.dashboard(filter, BalancePeriod::Daily).await?;
    let summary = service.summary_report(filter).await?;
    let balances = service.balance_report(filter, BalancePeriod::Daily).await?;
    let categories = service.category_report(filter).await?;
    let pending = service.pending_report(filter).await?;

    assert_eq!(dashboard.summary, summary.summary);
    assert_eq!(dashboard.balances, balances.rows);
    assert_eq!(dashboard.categories, categories.categories);
    assert_eq!(dashboard.pending, pending.customers);

    Ok(())
}

#[tokio::test]
async fn test_balances_rederived_after_delete() -> Result<()> {
    let (service, _temp) = test_service().await?;
    seed_sample(&service).await?;

    service.delete_at(0).await?;
    let report = service
        .balance_report(ReportFilter::default(), BalancePeriod::Daily)
        .await?;

    assert_eq!(report.rows[0].closing_balance, 250);
    assert_eq!(report.rows[1].opening_balance, 250);
    assert_eq!(report.rows[1].closing_balance, 430);

    Ok(())
}
