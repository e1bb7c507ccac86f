// Premium pay for one employee and month.
//
// `base_pay + overtime_pay + emergency_pay`, plus a 10% efficiency bonus on
// that subtotal when the average hours per work day exceed eight. A month
// without work days pays nothing.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

const BONUS_AVERAGE_HOURS: Decimal = dec!(8);
const BONUS_RATE: Decimal = dec!(0.10);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PayRates {
    pub base: Decimal,
    pub overtime: Decimal,
    pub emergency: Decimal,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MonthlyHours {
    pub regular: Decimal,
    pub overtime: Decimal,
    pub emergency: Decimal,
    pub work_days: u32,
}

impl MonthlyHours {
    pub fn total(&self) -> Decimal {
        self.regular + self.overtime + self.emergency
    }

    pub fn average_per_day(&self) -> Decimal {
        if self.work_days == 0 {
            return Decimal::ZERO;
        }
        (self.total() / Decimal::from(self.work_days)).round_dp(2)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PremiumPay {
    pub base_pay: Decimal,
    pub overtime_pay: Decimal,
    pub emergency_pay: Decimal,
    pub efficiency_bonus: Decimal,
    pub total: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PremiumPayCalculator {
    rates: PayRates,
}

impl PremiumPayCalculator {
    pub fn new(rates: PayRates) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> PayRates {
        self.rates
    }

    pub fn calculate(&self, hours: &MonthlyHours) -> PremiumPay {
        if hours.work_days == 0 {
            return PremiumPay::default();
        }
        let base_pay = (hours.regular * self.rates.base).round_dp(2);
        let overtime_pay = (hours.overtime * self.rates.overtime).round_dp(2);
        let emergency_pay = (hours.emergency * self.rates.emergency).round_dp(2);
        let subtotal = base_pay + overtime_pay + emergency_pay;
        let threshold = BONUS_AVERAGE_HOURS * Decimal::from(hours.work_days);
        let efficiency_bonus = if hours.total() > threshold {
            (subtotal * BONUS_RATE).round_dp(2)
        } else {
            Decimal::ZERO
        };
        PremiumPay {
            base_pay,
            overtime_pay,
            emergency_pay,
            efficiency_bonus,
            total: subtotal + efficiency_bonus,
        }
    }
}
