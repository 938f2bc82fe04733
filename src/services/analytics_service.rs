// src/services/analytics_service.rs

use chrono::{Datelike, Duration, NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::{
    common::{
        error::AppError,
        format::{format_currency, format_percent, MonthTable},
    },
    db::{DashboardRepository, OrderRepository, ProductRepository},
    models::dashboard::{
        AnalyticsReport, DashboardOverview, DateRange, KpiSnapshot, KpiValue, PeriodKind,
        PeriodParams, PeriodTotals, Trend,
    },
    services::{
        charts::{category_donut, sales_line_chart},
        formatter::{format_order, format_product},
    },
};

const MAX_CUSTOM_DAYS: i64 = 366;
const RECENT_ORDERS: i64 = 5;
const LOW_STOCK_ROWS: i64 = 5;
const TOP_PRODUCTS: i64 = 5;

impl DateRange {
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// Intervalo de mesmo tamanho imediatamente anterior.
    pub fn previous(&self) -> DateRange {
        DateRange {
            start: self.start - Duration::days(self.days()),
            end: self.start,
        }
    }
}

/// Resolve o filtro de período em `[start, end)` relativo a `today`.
pub fn resolve_period(params: &PeriodParams, today: NaiveDate) -> Result<DateRange, AppError> {
    let tomorrow = today + Duration::days(1);
    let range = match params.period {
        PeriodKind::Today => DateRange {
            start: today,
            end: tomorrow,
        },
        PeriodKind::Last7Days => DateRange {
            start: today - Duration::days(6),
            end: tomorrow,
        },
        PeriodKind::ThisMonth => DateRange {
            start: today.with_day(1).unwrap_or(today),
            end: tomorrow,
        },
        PeriodKind::Custom => {
            let (Some(from), Some(to)) = (params.from, params.to) else {
                return Err(AppError::InvalidPeriod(
                    "'from' e 'to' são obrigatórios para período personalizado".into(),
                ));
            };
            if from > to {
                return Err(AppError::InvalidPeriod("'from' depois de 'to'".into()));
            }
            let range = DateRange {
                start: from,
                end: to + Duration::days(1),
            };
            if range.days() > MAX_CUSTOM_DAYS {
                return Err(AppError::InvalidPeriod(format!(
                    "intervalo máximo de {MAX_CUSTOM_DAYS} dias"
                )));
            }
            range
        }
    };
    Ok(range)
}

/// Variação entre períodos.
///
/// Base anterior zero: 0% se o atual também for zero, `NotAvailable` caso
/// contrário (não existe percentual sobre zero).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delta {
    Percent(Decimal),
    NotAvailable,
}

impl Delta {
    pub fn as_option(&self) -> Option<Decimal> {
        match self {
            Delta::Percent(p) => Some(*p),
            Delta::NotAvailable => None,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Delta::Percent(p) if p.is_sign_positive() && !p.is_zero() => format!("+{}", format_percent(*p)),
            Delta::Percent(p) => format_percent(*p),
            Delta::NotAvailable => "N/A".to_string(),
        }
    }

    pub fn trend(&self) -> Trend {
        match self {
            Delta::Percent(p) if p.is_zero() => Trend::Flat,
            Delta::Percent(p) if p.is_sign_positive() => Trend::Up,
            Delta::Percent(_) => Trend::Down,
            Delta::NotAvailable => Trend::Unknown,
        }
    }
}

pub fn delta_percent(current: Decimal, previous: Decimal) -> Delta {
    if previous.is_zero() {
        return if current.is_zero() {
            Delta::Percent(Decimal::ZERO)
        } else {
            Delta::NotAvailable
        };
    }
    let pct = (current - previous) / previous * Decimal::ONE_HUNDRED;
    Delta::Percent(pct.round_dp(2))
}

fn ratio(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        Decimal::ZERO
    } else {
        (numerator / denominator).round_dp(2)
    }
}

impl PeriodTotals {
    pub fn average_order_value(&self) -> Decimal {
        ratio(self.total_sales, Decimal::from(self.order_count))
    }

    /// pedidos / visitas × 100
    pub fn conversion_rate(&self) -> Decimal {
        ratio(
            Decimal::from(self.order_count) * Decimal::ONE_HUNDRED,
            Decimal::from(self.visits),
        )
    }
}

fn kpi(current: Decimal, previous: Decimal, display: String) -> KpiValue {
    let delta = delta_percent(current, previous);
    KpiValue {
        value: current,
        display,
        delta_percent: delta.as_option(),
        delta_label: delta.label(),
        trend: delta.trend(),
    }
}

/// Monta o snapshot completo; recalculado do zero a cada troca de período.
pub fn build_snapshot(
    period: PeriodKind,
    range: DateRange,
    current: &PeriodTotals,
    previous: &PeriodTotals,
) -> KpiSnapshot {
    let orders_now = Decimal::from(current.order_count);
    let orders_before = Decimal::from(previous.order_count);
    let aov = current.average_order_value();
    let conversion = current.conversion_rate();

    KpiSnapshot {
        period,
        range,
        previous_range: range.previous(),
        total_sales: kpi(
            current.total_sales,
            previous.total_sales,
            format_currency(current.total_sales),
        ),
        order_count: kpi(orders_now, orders_before, current.order_count.to_string()),
        average_order_value: kpi(aov, previous.average_order_value(), format_currency(aov)),
        conversion_rate: kpi(conversion, previous.conversion_rate(), format_percent(conversion)),
    }
}

#[derive(Clone)]
pub struct AnalyticsService {
    repo: DashboardRepository,
    orders: OrderRepository,
    products: ProductRepository,
}

impl AnalyticsService {
    pub fn new(repo: DashboardRepository, orders: OrderRepository, products: ProductRepository) -> Self {
        Self {
            repo,
            orders,
            products,
        }
    }

    fn today() -> NaiveDate {
        Utc::now().date_naive()
    }

    #[tracing::instrument(skip(self))]
    pub async fn kpis(&self, params: &PeriodParams) -> Result<KpiSnapshot, AppError> {
        let range = resolve_period(params, Self::today())?;
        let (current, previous) = tokio::try_join!(
            self.repo.period_totals(range),
            self.repo.period_totals(range.previous()),
        )?;
        Ok(build_snapshot(params.period, range, &current, &previous))
    }

    /// Cards do topo + últimos pedidos + estoque baixo. As listas degradam
    /// para vazio em caso de falha; os KPIs não.
    #[tracing::instrument(skip(self))]
    pub async fn overview(&self, months: MonthTable) -> Result<DashboardOverview, AppError> {
        let today = PeriodParams::default();
        let (kpis, recent, low_stock) = tokio::join!(
            self.kpis(&today),
            self.orders.recent(RECENT_ORDERS),
            self.products.low_stock(LOW_STOCK_ROWS),
        );

        let recent_orders = recent
            .unwrap_or_else(|e| {
                tracing::error!(error = %e, "Falha ao carregar últimos pedidos");
                Vec::new()
            })
            .into_iter()
            .map(|o| format_order(o, months))
            .collect();

        let low_stock = low_stock
            .unwrap_or_else(|e| {
                tracing::error!(error = %e, "Falha ao carregar estoque baixo");
                Vec::new()
            })
            .into_iter()
            .map(format_product)
            .collect();

        Ok(DashboardOverview {
            kpis: kpis?,
            recent_orders,
            low_stock,
        })
    }

    #[tracing::instrument(skip(self))]
    pub async fn report(&self, params: &PeriodParams, months: MonthTable) -> Result<AnalyticsReport, AppError> {
        let range = resolve_period(params, Self::today())?;
        let (current, previous, daily, categories, top_products) = tokio::try_join!(
            self.repo.period_totals(range),
            self.repo.period_totals(range.previous()),
            self.repo.daily_sales(range),
            self.repo.sales_by_category(range),
            self.repo.top_products(range, TOP_PRODUCTS),
        )?;

        tracing::info!(
            period = ?params.period,
            days = range.days(),
            orders = current.order_count,
            "Relatório de analytics gerado"
        );

        Ok(AnalyticsReport {
            kpis: build_snapshot(params.period, range, &current, &previous),
            sales_chart: sales_line_chart(&daily, months),
            category_chart: category_donut(&categories),
            top_products,
        })
    }
}
