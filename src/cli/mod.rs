use std::io::stdout;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use tracing::info;

use crate::application::{AccessContext, LedgerService, ReportFilter};
use crate::config::{DEFAULT_CONFIG_FILE, Settings};
use crate::domain::{
    BalancePeriod, BalanceRow, CustomerBalance, EntryDraft, LedgerSummary, PaymentStatus,
    ServiceCategory, format_cents, format_money, parse_cents,
};
use crate::io::Exporter;

/// servicebook - bookkeeping for a document-processing shop
#[derive(Parser)]
#[command(name = "servicebook")]
#[command(about = "Record service entries and expenses, track pending payments and cash balances")]
#[command(version)]
pub struct Cli {
    /// Database file path (overrides the settings file)
    #[arg(short, long, env = "SERVICEBOOK_DB", global = true)]
    pub database: Option<String>,

    /// Settings file path
    #[arg(long, env = "SERVICEBOOK_CONFIG", default_value = DEFAULT_CONFIG_FILE, global = true)]
    pub config: PathBuf,

    /// Admin user name
    #[arg(long, env = "SERVICEBOOK_USER", global = true)]
    pub user: Option<String>,

    /// Admin password
    #[arg(long, env = "SERVICEBOOK_PASSWORD", hide_env_values = true, global = true)]
    pub password: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the ledger database
    Init,

    /// Record a service entry or an expense
    #[command(subcommand)]
    Add(AddCommands),

    /// List entries with their positions
    List {
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// End date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Output format: table, json, csv
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Delete the entry at a position shown by `list`
    Delete {
        /// Zero-based position
        position: usize,
    },

    /// Generate reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export data to CSV or JSON
    Export {
        /// What to export: entries, balances, summary, categories, pending, full
        export_type: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// End date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Bucket size for balances: daily, weekly, monthly
        #[arg(long, default_value = "daily")]
        period: String,
    },

    /// Import data from a CSV sheet or JSON snapshot
    Import {
        /// What to import: entries, full
        import_type: String,

        /// Input file
        #[arg(short, long)]
        input: PathBuf,

        /// Validate without importing
        #[arg(long)]
        dry_run: bool,
    },
}

#[derive(Subcommand)]
pub enum AddCommands {
    /// Record work done for a customer
    Service {
        /// Service provided (e.g. passport, "National ID Card")
        #[arg(short, long)]
        service: String,

        /// Amount charged (e.g. "500" or "500.00")
        #[arg(short, long)]
        income: String,

        /// Cost incurred for the service
        #[arg(short, long, default_value = "0")]
        expense: String,

        /// Customer name
        #[arg(short, long)]
        customer: Option<String>,

        /// Number of applications handled
        #[arg(short, long, default_value = "1")]
        applications: u32,

        /// Treat income and expense as per-application amounts
        #[arg(long)]
        per_application: bool,

        /// Payment status: paid, pending, partial
        #[arg(long, default_value = "paid")]
        status: String,

        /// Amount received so far (partial payments)
        #[arg(short, long)]
        received: Option<String>,

        /// Date of the entry (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Free-text remarks
        #[arg(long)]
        remarks: Option<String>,
    },

    /// Record money spent by the shop
    Expense {
        /// Amount spent
        amount: String,

        /// Date of the expense (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Free-text remarks
        #[arg(long)]
        remarks: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ReportCommands {
    /// Opening and closing cash balance per day, week or month
    Balances {
        #[arg(long)]
        from: Option<String>,

        #[arg(long)]
        to: Option<String>,

        /// Period: daily, weekly, monthly
        #[arg(long, default_value = "daily")]
        period: String,

        /// Output format: table, json, csv
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Totals for income, expense, collections and cash
    Summary {
        #[arg(long)]
        from: Option<String>,

        #[arg(long)]
        to: Option<String>,

        /// Output format: table, json, csv
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Income and profit per service
    Categories {
        #[arg(long)]
        from: Option<String>,

        #[arg(long)]
        to: Option<String>,

        /// Output format: table, json, csv
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Money still owed, by customer
    Pending {
        #[arg(long)]
        from: Option<String>,

        #[arg(long)]
        to: Option<String>,

        /// Output format: table, json, csv
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Summary, balances, services and pending payments together
    Dashboard {
        #[arg(long)]
        from: Option<String>,

        #[arg(long)]
        to: Option<String>,

        /// Period: daily, weekly, monthly
        #[arg(long, default_value = "daily")]
        period: String,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },
}

impl Cli {
    /// Load the settings file and apply command-line overrides.
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = Settings::load(&self.config)?;
        if let Some(database) = &self.database {
            settings.database = database.clone();
        }
        Ok(settings)
    }

    /// Log filter to install when RUST_LOG is not set.
    pub fn log_filter(&self, settings: &Settings) -> String {
        if self.verbose {
            "debug".to_string()
        } else {
            settings.log_level.clone()
        }
    }

    pub async fn run(self, settings: Settings) -> Result<()> {
        let symbol = settings.currency_symbol.as_str();

        let ctx = AccessContext::authorize(
            settings.admin.as_ref(),
            self.user.as_deref(),
            self.password.as_deref(),
        )?;
        let service = LedgerService::open(&settings.database).await?;

        match self.command {
            Commands::Init => {
                let entries = service.len().await?;
                println!(
                    "Ledger ready: {} ({} entries)",
                    settings.database, entries
                );
            }

            Commands::Add(add_cmd) => run_add_command(&service, &ctx, add_cmd, symbol).await?,

            Commands::List { from, to, format } => {
                let filter = parse_filter(from, to)?;
                run_list_command(&service, filter, &format, symbol).await?;
            }

            Commands::Delete { position } => {
                let record = service.delete_at(position).await?;
                info!(operator = ctx.operator(), position, "entry removed by operator");
                println!(
                    "Deleted entry {}: {} {} {}",
                    position,
                    record.date,
                    record.kind,
                    format_money(record.income_cents.max(record.expense_cents), symbol)
                );
            }

            Commands::Report(report_cmd) => run_report_command(&service, report_cmd, symbol).await?,

            Commands::Export {
                export_type,
                output,
                from,
                to,
                period,
            } => {
                let filter = parse_filter(from, to)?;
                let period = parse_period(&period)?;
                run_export_command(&service, &export_type, output, filter, period).await?;
            }

            Commands::Import {
                import_type,
                input,
                dry_run,
            } => run_import_command(&service, &ctx, &import_type, input, dry_run).await?,
        }

        Ok(())
    }
}

async fn run_add_command(
    service: &LedgerService,
    ctx: &AccessContext,
    cmd: AddCommands,
    symbol: &str,
) -> Result<()> {
    let draft = match cmd {
        AddCommands::Service {
            service: service_name,
            income,
            expense,
            customer,
            applications,
            per_application,
            status,
            received,
            date,
            remarks,
        } => {
            let category = parse_category(&service_name)?;
            let status = PaymentStatus::from_str(&status).with_context(|| {
                format!("Invalid payment status '{}'. Use paid, pending or partial", status)
            })?;
            let received = received.as_deref().map(parse_amount).transpose()?;
            if status == PaymentStatus::Partial && received.is_none() {
                bail!("Partial payments need --received");
            }

            let mut draft = EntryDraft::service(parse_date_or_today(date)?, category)
                .with_applications(applications)
                .with_income(parse_amount(&income)?)
                .with_expense(parse_amount(&expense)?)
                .with_payment(status, received.unwrap_or(0))
                .with_remarks(remarks.unwrap_or_default());
            if let Some(name) = customer {
                draft = draft.with_customer(name);
            }
            if per_application {
                draft = draft.per_application();
            }
            draft
        }
        AddCommands::Expense {
            amount,
            date,
            remarks,
        } => EntryDraft::expense(parse_date_or_today(date)?, parse_amount(&amount)?)
            .with_remarks(remarks.unwrap_or_default()),
    };

    let entry = service.record_entry(draft).await?;
    info!(
        operator = ctx.operator(),
        position = entry.position,
        "entry recorded by operator"
    );

    let record = &entry.record;
    println!(
        "Recorded {} #{} on {}: income {}, expense {}, profit {}, pending {}",
        record.kind,
        entry.position,
        record.date,
        format_money(record.income_cents, symbol),
        format_money(record.expense_cents, symbol),
        format_money(record.profit(), symbol),
        format_money(record.pending_cents(), symbol),
    );
    Ok(())
}

async fn run_list_command(
    service: &LedgerService,
    filter: ReportFilter,
    format: &str,
    symbol: &str,
) -> Result<()> {
    let entries = service.list_entries(filter).await?;

    match format {
        "json" => {
            let records: Vec<_> = entries.iter().map(|e| &e.record).collect();
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        "csv" => {
            Exporter::new(service)
                .export_entries_csv(stdout(), filter)
                .await?;
        }
        _ => {
            if entries.is_empty() {
                println!("No entries found.");
                return Ok(());
            }

            println!(
                "{:>4} {:<10} {:<8} {:<16} {:<20} {:>4} {:>10} {:>10} {:>10} {:<8} {:>10}",
                "#",
                "DATE",
                "TYPE",
                "CUSTOMER",
                "SERVICE",
                "APPS",
                "EXPENSE",
                "INCOME",
                "PROFIT",
                "STATUS",
                "PENDING"
            );
            println!("{}", "-".repeat(122));
            for entry in &entries {
                let r = &entry.record;
                println!(
                    "{:>4} {:<10} {:<8} {:<16} {:<20} {:>4} {:>10} {:>10} {:>10} {:<8} {:>10}",
                    entry.position,
                    r.date.to_string(),
                    r.kind.label(),
                    truncate(r.customer.as_deref().unwrap_or(""), 16),
                    truncate(r.service.map(|s| s.label()).unwrap_or(""), 20),
                    r.application_count,
                    format_cents(r.expense_cents),
                    format_cents(r.income_cents),
                    format_cents(r.profit()),
                    r.payment_status.label(),
                    format_cents(r.pending_cents()),
                );
            }
            if !symbol.is_empty() {
                println!("Amounts in {}", symbol);
            }
        }
    }
    Ok(())
}

async fn run_report_command(
    service: &LedgerService,
    cmd: ReportCommands,
    symbol: &str,
) -> Result<()> {
    match cmd {
        ReportCommands::Balances {
            from,
            to,
            period,
            format,
        } => {
            let filter = parse_filter(from, to)?;
            let period = parse_period(&period)?;

            if format == "csv" {
                Exporter::new(service)
                    .export_balances_csv(stdout(), filter, period)
                    .await?;
                return Ok(());
            }

            let report = service.balance_report(filter, period).await?;
            match format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&report)?),
                _ => {
                    println!("Cash Balance Report ({})", report.period);
                    print_range(filter);
                    println!();
                    print_balance_table(&report.rows, report.period, symbol);
                }
            }
        }

        ReportCommands::Summary { from, to, format } => {
            let filter = parse_filter(from, to)?;

            if format == "csv" {
                Exporter::new(service)
                    .export_summary_csv(stdout(), filter)
                    .await?;
                return Ok(());
            }

            let report = service.summary_report(filter).await?;
            let s = &report.summary;
            match format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&report)?),
                _ => {
                    println!("Ledger Summary");
                    print_range(filter);
                    println!();
                    print_summary(s, symbol);
                }
            }
        }

        ReportCommands::Categories { from, to, format } => {
            let filter = parse_filter(from, to)?;

            if format == "csv" {
                Exporter::new(service)
                    .export_categories_csv(stdout(), filter)
                    .await?;
                return Ok(());
            }

            let report = service.category_report(filter).await?;
            match format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&report)?),
                _ => {
                    println!("Service Report");
                    print_range(filter);
                    println!();
                    if report.categories.is_empty() {
                        println!("No service entries in this range.");
                        return Ok(());
                    }
                    println!(
                        "{:<22} {:>6} {:>6} {:>14} {:>14} {:>14}",
                        "SERVICE", "COUNT", "APPS", "INCOME", "EXPENSE", "PROFIT"
                    );
                    println!("{}", "-".repeat(82));
                    for c in &report.categories {
                        println!(
                            "{:<22} {:>6} {:>6} {:>14} {:>14} {:>14}",
                            c.category.label(),
                            c.count,
                            c.applications,
                            format_money(c.income, symbol),
                            format_money(c.expense, symbol),
                            format_money(c.profit, symbol)
                        );
                    }
                    println!("{}", "-".repeat(82));
                    println!(
                        "{:<36} {:>14} {:>14} {:>14}",
                        "TOTAL",
                        format_money(report.total_income, symbol),
                        "",
                        format_money(report.total_profit, symbol)
                    );
                }
            }
        }

        ReportCommands::Pending { from, to, format } => {
            let filter = parse_filter(from, to)?;

            if format == "csv" {
                Exporter::new(service)
                    .export_pending_csv(stdout(), filter)
                    .await?;
                return Ok(());
            }

            let report = service.pending_report(filter).await?;
            match format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&report)?),
                _ => {
                    println!("Pending Payments");
                    print_range(filter);
                    println!();
                    print_pending_table(&report.customers, symbol);
                    println!(
                        "{:<20} {:>14}",
                        "TOTAL PENDING",
                        format_money(report.total_pending, symbol)
                    );
                }
            }
        }

        ReportCommands::Dashboard {
            from,
            to,
            period,
            format,
        } => {
            let filter = parse_filter(from, to)?;
            let report = service.dashboard(filter, parse_period(&period)?).await?;

            match format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&report)?),
                _ => {
                    println!("Dashboard");
                    print_range(filter);
                    println!();
                    print_summary(&report.summary, symbol);
                    println!();
                    println!("Cash balances ({})", report.period);
                    print_balance_table(&report.balances, report.period, symbol);
                    println!();
                    println!("Top services by income");
                    let mut top = report.categories.clone();
                    top.sort_by(|a, b| b.income.cmp(&a.income));
                    for c in top.iter().take(5) {
                        println!(
                            "  {:<22} {:>4} apps {:>14}",
                            c.category.label(),
                            c.applications,
                            format_money(c.income, symbol)
                        );
                    }
                    println!();
                    println!("Pending payments");
                    print_pending_table(&report.pending, symbol);
                }
            }
        }
    }

    Ok(())
}

async fn run_export_command(
    service: &LedgerService,
    export_type: &str,
    output: Option<PathBuf>,
    filter: ReportFilter,
    period: BalancePeriod,
) -> Result<()> {
    use std::fs::File;
    use std::io::Write;

    let exporter = Exporter::new(service);
    let writer: Box<dyn Write> = match &output {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?,
        ),
        None => Box::new(stdout()),
    };

    match export_type {
        "entries" => {
            let count = exporter.export_entries_csv(writer, filter).await?;
            eprintln!("Exported {} entries", count);
        }
        "balances" => {
            let count = exporter.export_balances_csv(writer, filter, period).await?;
            eprintln!("Exported {} balance rows", count);
        }
        "summary" => exporter.export_summary_csv(writer, filter).await?,
        "categories" => {
            let count = exporter.export_categories_csv(writer, filter).await?;
            eprintln!("Exported {} service rows", count);
        }
        "pending" => {
            let count = exporter.export_pending_csv(writer, filter).await?;
            eprintln!("Exported {} customers", count);
        }
        "full" => {
            let snapshot = exporter.export_full_json(writer).await?;
            eprintln!("Exported snapshot with {} entries", snapshot.entries.len());
        }
        other => bail!(
            "Unknown export type '{}'. Use entries, balances, summary, categories, pending or full",
            other
        ),
    }
    Ok(())
}

async fn run_import_command(
    service: &LedgerService,
    ctx: &AccessContext,
    import_type: &str,
    input: PathBuf,
    dry_run: bool,
) -> Result<()> {
    use crate::io::{ImportOptions, Importer};
    use std::fs::File;

    let file = File::open(&input)
        .with_context(|| format!("Failed to open input file {}", input.display()))?;
    let importer = Importer::new(service);
    let options = ImportOptions { dry_run };

    let result = match import_type {
        "entries" => importer.import_entries_csv(file, options).await?,
        "full" => importer.import_full_json(file, options).await?,
        other => bail!("Unknown import type '{}'. Use entries or full", other),
    };
    info!(
        operator = ctx.operator(),
        imported = result.imported,
        "import run by operator"
    );

    if dry_run {
        println!("Dry run: nothing written");
    } else {
        println!("Import complete");
    }
    println!("  Valid:    {}", result.valid);
    println!("  Imported: {}", result.imported);
    println!("  Errors:   {}", result.errors.len());

    if !result.errors.is_empty() {
        println!("\nErrors:");
        for error in result.errors.iter().take(10) {
            println!("  Line {}: {}", error.line, error.error);
        }
        if result.errors.len() > 10 {
            println!("  ... and {} more errors", result.errors.len() - 10);
        }
    }
    Ok(())
}

fn print_range(filter: ReportFilter) {
    match (filter.from, filter.to) {
        (None, None) => println!("Period: all entries"),
        (Some(from), None) => println!("Period: from {}", from),
        (None, Some(to)) => println!("Period: up to {}", to),
        (Some(from), Some(to)) => println!("Period: {} to {}", from, to),
    }
}

fn print_summary(s: &LedgerSummary, symbol: &str) {
    println!("Entries:          {:>15}", s.entry_count);
    println!("Applications:     {:>15}", s.total_applications);
    println!("Total Income:     {:>15}", format_money(s.total_income, symbol));
    println!("Total Expense:    {:>15}", format_money(s.total_expense, symbol));
    println!("Profit:           {:>15}", format_money(s.total_profit, symbol));
    println!("Received:         {:>15}", format_money(s.total_received, symbol));
    println!("Pending:          {:>15}", format_money(s.total_pending, symbol));
    println!("{}", "-".repeat(34));
    println!("Closing Balance:  {:>15}", format_money(s.closing_balance, symbol));
}

fn print_balance_table(rows: &[BalanceRow], period: BalancePeriod, symbol: &str) {
    if rows.is_empty() {
        println!("No entries in this range.");
        return;
    }
    println!(
        "{:<23} {:>14} {:>14} {:>14} {:>14} {:>14}",
        "PERIOD", "OPENING", "RECEIVED", "EXPENSE", "NET", "CLOSING"
    );
    println!("{}", "-".repeat(98));
    for row in rows {
        println!(
            "{:<23} {:>14} {:>14} {:>14} {:>14} {:>14}",
            period_label(row.date, period),
            format_money(row.opening_balance, symbol),
            format_money(row.received, symbol),
            format_money(row.expense, symbol),
            format_money(row.net, symbol),
            format_money(row.closing_balance, symbol)
        );
    }
}

fn print_pending_table(customers: &[CustomerBalance], symbol: &str) {
    if customers.is_empty() {
        println!("Nothing pending.");
        return;
    }
    println!(
        "{:<20} {:>7} {:>14} {:>14} {:>14}",
        "CUSTOMER", "ENTRIES", "INCOME", "RECEIVED", "PENDING"
    );
    println!("{}", "-".repeat(73));
    for c in customers {
        println!(
            "{:<20} {:>7} {:>14} {:>14} {:>14}",
            truncate(&c.customer, 20),
            c.count,
            format_money(c.income, symbol),
            format_money(c.received, symbol),
            format_money(c.pending, symbol)
        );
    }
}

fn parse_date(date_str: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}'. Use YYYY-MM-DD", date_str))
}

fn parse_date_or_today(date: Option<String>) -> Result<NaiveDate> {
    match date {
        Some(date_str) => parse_date(&date_str),
        None => Ok(Local::now().date_naive()),
    }
}

fn parse_filter(from: Option<String>, to: Option<String>) -> Result<ReportFilter> {
    Ok(ReportFilter {
        from: from.as_deref().map(parse_date).transpose()?,
        to: to.as_deref().map(parse_date).transpose()?,
    })
}

fn parse_period(period: &str) -> Result<BalancePeriod> {
    BalancePeriod::from_str(period).with_context(|| {
        format!("Invalid period '{}'. Use daily, weekly or monthly", period)
    })
}

fn parse_amount(amount: &str) -> Result<i64> {
    let cents =
        parse_cents(amount).context("Invalid amount format. Use '50.00' or '50'")?;
    if cents < 0 {
        bail!("Amounts cannot be negative: {}", amount);
    }
    Ok(cents)
}

fn parse_category(name: &str) -> Result<ServiceCategory> {
    ServiceCategory::from_str(name).with_context(|| {
        let known: Vec<&str> = ServiceCategory::ALL.iter().map(|c| c.as_str()).collect();
        format!("Unknown service '{}'. Known services: {}", name, known.join(", "))
    })
}

/// Bucket label for balance tables: the day itself, or `start..end`.
fn period_label(start: NaiveDate, period: BalancePeriod) -> String {
    match period {
        BalancePeriod::Daily => start.to_string(),
        _ => format!("{}..{}", start, period.bucket_end(start)),
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filter() {
        let filter = parse_filter(Some("2024-01-01".into()), None).unwrap();
        assert_eq!(filter.from, NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(filter.to, None);
        assert!(parse_filter(Some("01/01/2024".into()), None).is_err());
    }

    #[test]
    fn test_parse_amount_rejects_negative() {
        assert_eq!(parse_amount("12.50").unwrap(), 1250);
        assert!(parse_amount("-1").is_err());
    }

    #[test]
    fn test_period_label() {
        let monday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(period_label(monday, BalancePeriod::Daily), "2024-01-01");
        assert_eq!(
            period_label(monday, BalancePeriod::Weekly),
            "2024-01-01..2024-01-07"
        );
        assert_eq!(
            period_label(monday, BalancePeriod::Monthly),
            "2024-01-01..2024-01-31"
        );
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long customer name", 10), "a very ...");
    }

    #[test]
    fn test_cli_parses_add_service() {
        let cli = Cli::try_parse_from([
            "servicebook",
            "add",
            "service",
            "--service",
            "passport",
            "--income",
            "500",
            "--status",
            "partial",
            "--received",
            "200",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Add(AddCommands::Service { applications: 1, .. })
        ));
    }
}
