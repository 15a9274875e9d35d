//! Per-run state for the balance projection
//!
//! `ProjectionContext` holds everything derived once per run (expanded event
//! occurrences, housing figures, rental stop months). `Balances` is the only
//! value carried from one month to the next.

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;

use crate::config::SimulationConfig;
use crate::error::{MoneyError, Result};
use crate::housing::{self, HousingDerivation};
use crate::life_events::expand_life_events;
use crate::model::{EventOccurrence, LifeEvent};
use crate::money::{Money, Rounding};
use crate::year_month::YearMonth;

/// Running cash and investment balances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Balances {
    pub cash: Money,
    pub investment: Money,
}

impl Balances {
    pub fn total(&self) -> std::result::Result<Money, MoneyError> {
        self.cash.checked_add(self.investment)
    }

    /// Book one month's net cashflow and investment growth.
    ///
    /// A cash deficit is covered from investments first (which may go
    /// negative); growth is applied afterwards to the adjusted investment
    /// balance.
    pub fn advance(
        self,
        net_cashflow: Money,
        monthly_return: Decimal,
    ) -> std::result::Result<Self, MoneyError> {
        let mut cash = self.cash.checked_add(net_cashflow)?;
        let mut investment = self.investment;
        if cash.is_negative() {
            investment = investment.checked_add(cash)?;
            cash = Money::ZERO;
        }
        let investment = investment.mul(Decimal::ONE + monthly_return, Rounding::Round)?;
        Ok(Self { cash, investment })
    }
}

/// Inputs resolved once per run
#[derive(Debug, Clone)]
pub struct ProjectionContext<'a> {
    pub config: &'a SimulationConfig,
    pub occurrences: Vec<EventOccurrence>,
    /// Elapsed-month index -> positions in `occurrences`
    pub occurrences_by_month: FxHashMap<i64, Vec<usize>>,
    pub housing: Vec<HousingDerivation>,
    /// Parallel to `config.rentals`
    pub rental_stops: Vec<Option<YearMonth>>,
    pub monthly_return: Decimal,
    pub opening: Balances,
}

impl<'a> ProjectionContext<'a> {
    pub fn from_config(
        config: &'a SimulationConfig,
        window: Option<(YearMonth, YearMonth)>,
    ) -> Result<Self> {
        let housing = housing::derive_all(&config.life_events, &config.settings)?;

        let occurrences = match window {
            Some((start, end)) => {
                expand_life_events(&config.life_events, start, end, &config.profile)?
            }
            None => Vec::new(),
        };
        let mut occurrences_by_month: FxHashMap<i64, Vec<usize>> = FxHashMap::default();
        for (position, occurrence) in occurrences.iter().enumerate() {
            occurrences_by_month
                .entry(occurrence.year_month.elapsed_months())
                .or_default()
                .push(position);
        }

        let rental_stops = config
            .rentals
            .iter()
            .map(|rental| {
                let stop = rental
                    .auto_toggle_key
                    .as_deref()
                    .and_then(|key| housing::rental_stop_month(&housing, key));
                if let Some(stop) = stop {
                    tracing::debug!(
                        rental = %rental.name,
                        %stop,
                        "rental stops at housing purchase"
                    );
                }
                stop
            })
            .collect();

        let opening = config.assets.iter().try_fold(
            Balances::default(),
            |acc, asset| -> std::result::Result<Balances, MoneyError> {
                Ok(Balances {
                    cash: acc.cash.checked_add(asset.cash)?,
                    investment: acc.investment.checked_add(asset.investment)?,
                })
            },
        )?;
        // Rates are not additive across accounts; the first non-zero one applies
        let annual_return = config
            .assets
            .iter()
            .map(|a| a.return_rate)
            .find(|rate| !rate.is_zero())
            .unwrap_or(Decimal::ZERO);

        Ok(Self {
            config,
            occurrences,
            occurrences_by_month,
            housing,
            rental_stops,
            monthly_return: annual_return / Decimal::from(12),
            opening,
        })
    }

    /// Occurrences landing on `month`, paired with their templates
    pub fn events_in(&self, month: YearMonth) -> impl Iterator<Item = &LifeEvent> + '_ {
        self.occurrences_by_month
            .get(&month.elapsed_months())
            .into_iter()
            .flatten()
            .map(|&position| &self.config.life_events[self.occurrences[position].event_index])
    }
}
