//! Signal engine: converts an indicator frame into a trade log.
//!
//! # Evaluation semantics
//!
//! - The walk starts at index 1 (there is no prior bar to compare against at
//!   index 0) and visits every bar in date order.
//! - If the MA or RSI point is invalid at an index, no rule is evaluated there.
//! - Rules are evaluated in order and at most one fires per index:
//!   1. not long, RSI below the oversold threshold, close above MA -> go long
//!   2. not short, RSI above the overbought threshold, close below MA -> go short
//! - An open position at the end of the series is left open; there is no
//!   forced liquidation.

use chrono::NaiveDate;
use std::fmt;

use crate::domain::error::OsctraderError;
use crate::domain::frame::IndicatorFrame;
use crate::domain::strategy::StrategyParams;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Short,
    Flat,
    Long,
}

impl Position {
    pub fn as_int(self) -> i8 {
        match self {
            Position::Short => -1,
            Position::Flat => 0,
            Position::Long => 1,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Position::Short => write!(f, "short"),
            Position::Flat => write!(f, "flat"),
            Position::Long => write!(f, "long"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeKind {
    Buy,
    Sell,
}

impl fmt::Display for TradeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeKind::Buy => write!(f, "buy"),
            TradeKind::Sell => write!(f, "sell"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TradeEvent {
    pub date: NaiveDate,
    pub kind: TradeKind,
    pub price: f64,
    pub resulting_position: Position,
}

/// Walk the frame in date order and emit the trade log.
///
/// Deterministic: the same frame and parameters always produce an identical
/// log. Fails with [`OsctraderError::InvalidParameters`] before touching the
/// frame if the parameter set is unusable.
pub fn walk_signals(
    frame: &IndicatorFrame,
    params: &StrategyParams,
) -> Result<Vec<TradeEvent>, OsctraderError> {
    params.validate()?;

    let mut position = Position::Flat;
    let mut events = Vec::new();

    for i in 1..frame.bars.len() {
        let (Some(ma), Some(rsi)) = (frame.ma.value_at(i), frame.rsi.value_at(i)) else {
            continue;
        };
        let bar = &frame.bars[i];

        if position != Position::Long && rsi < params.rsi_oversold && bar.close > ma {
            position = Position::Long;
            events.push(TradeEvent {
                date: bar.date,
                kind: TradeKind::Buy,
                price: bar.close,
                resulting_position: position,
            });
        } else if position != Position::Short && rsi > params.rsi_overbought && bar.close < ma {
            position = Position::Short;
            events.push(TradeEvent {
                date: bar.date,
                kind: TradeKind::Sell,
                price: bar.close,
                resulting_position: position,
            });
        }
    }

    Ok(events)
}
