use crate::core::models::PriceKey;

/// A technical indicator and its parameters.
///
/// The series is computed by the service; this type only selects the indicator
/// and carries its inputs. The constructors (`Indicator::rsi()`, ...) fill in the
/// documented defaults, which are always sent so the request is explicit:
///
/// ```
/// # use intrinio_rs::technicals::Indicator;
/// # use intrinio_rs::PriceKey;
/// let default_rsi = Indicator::rsi();
/// assert_eq!(default_rsi, Indicator::Rsi { period: 14, price_key: PriceKey::Close });
///
/// let fast_rsi = Indicator::Rsi { period: 7, price_key: PriceKey::Close };
/// assert_eq!(fast_rsi.code(), "rsi");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Indicator {
    /// Accumulation/Distribution Index.
    Adi,
    /// Average Daily Trading Volume.
    Adtv { period: u32 },
    /// Average Directional Index.
    Adx { period: u32 },
    /// Awesome Oscillator.
    Ao { short_period: u32, long_period: u32 },
    /// Average True Range.
    Atr { period: u32 },
    /// Bollinger Bands.
    Bb { period: u32, standard_deviations: f64, price_key: PriceKey },
    /// Commodity Channel Index.
    Cci { period: u32, constant: f64 },
    /// Chaikin Money Flow.
    Cmf { period: u32 },
    /// Donchian Channel.
    Dc { period: u32, price_key: PriceKey },
    /// Detrended Price Oscillator.
    Dpo { period: u32, price_key: PriceKey },
    /// Ease of Movement.
    Eom { period: u32 },
    /// Force Index.
    Fi,
    /// Ichimoku Kinko Hyo.
    Ichimoku { low_period: u32, medium_period: u32, high_period: u32 },
    /// Keltner Channel.
    Kc { period: u32 },
    /// Know Sure Thing.
    Kst { roclen: [u32; 4], smalen: [u32; 4], price_key: PriceKey },
    /// Moving Average Convergence Divergence.
    Macd { fast_period: u32, slow_period: u32, signal_period: u32, price_key: PriceKey },
    /// Money Flow Index.
    Mfi { period: u32 },
    /// Mass Index.
    Mi { ema_period: u32, sum_period: u32 },
    /// Negative Volume Index.
    Nvi,
    /// On-balance Volume.
    Obv,
    /// On-balance Volume Mean.
    ObvMean { period: u32 },
    /// Relative Strength Index.
    Rsi { period: u32, price_key: PriceKey },
    /// Simple Moving Average.
    Sma { period: u32, price_key: PriceKey },
    /// Stochastic Oscillator.
    Sr { period: u32, signal_period: u32 },
    /// Triple Exponential Average.
    Trix { period: u32 },
    /// True Strength Index.
    Tsi { low_period: u32, high_period: u32, price_key: PriceKey },
    /// Ultimate Oscillator.
    Uo {
        short_period: u32,
        medium_period: u32,
        long_period: u32,
        short_weight: f64,
        medium_weight: f64,
        long_weight: f64,
    },
    /// Vortex Indicator.
    Vi { period: u32 },
    /// Volume-price Trend.
    Vpt,
    /// Volume Weighted Average Price.
    Vwap,
    /// Williams %R.
    Wr { period: u32 },
}

impl Indicator {
    pub const fn adtv() -> Self {
        Self::Adtv { period: 22 }
    }

    pub const fn adx() -> Self {
        Self::Adx { period: 14 }
    }

    pub const fn ao() -> Self {
        Self::Ao { short_period: 5, long_period: 34 }
    }

    pub const fn atr() -> Self {
        Self::Atr { period: 14 }
    }

    pub const fn bb() -> Self {
        Self::Bb { period: 20, standard_deviations: 2.0, price_key: PriceKey::Close }
    }

    pub const fn cci() -> Self {
        Self::Cci { period: 20, constant: 0.015 }
    }

    pub const fn cmf() -> Self {
        Self::Cmf { period: 20 }
    }

    pub const fn dc() -> Self {
        Self::Dc { period: 20, price_key: PriceKey::Close }
    }

    pub const fn dpo() -> Self {
        Self::Dpo { period: 20, price_key: PriceKey::Close }
    }

    pub const fn eom() -> Self {
        Self::Eom { period: 20 }
    }

    pub const fn ichimoku() -> Self {
        Self::Ichimoku { low_period: 9, medium_period: 26, high_period: 52 }
    }

    pub const fn kc() -> Self {
        Self::Kc { period: 10 }
    }

    pub const fn kst() -> Self {
        Self::Kst { roclen: [10, 15, 20, 30], smalen: [10, 10, 10, 15], price_key: PriceKey::Close }
    }

    pub const fn macd() -> Self {
        Self::Macd { fast_period: 12, slow_period: 26, signal_period: 9, price_key: PriceKey::Close }
    }

    pub const fn mfi() -> Self {
        Self::Mfi { period: 14 }
    }

    pub const fn mi() -> Self {
        Self::Mi { ema_period: 9, sum_period: 25 }
    }

    pub const fn obv_mean() -> Self {
        Self::ObvMean { period: 10 }
    }

    pub const fn rsi() -> Self {
        Self::Rsi { period: 14, price_key: PriceKey::Close }
    }

    pub const fn sma() -> Self {
        Self::Sma { period: 20, price_key: PriceKey::Close }
    }

    pub const fn sr() -> Self {
        Self::Sr { period: 14, signal_period: 3 }
    }

    pub const fn trix() -> Self {
        Self::Trix { period: 15 }
    }

    pub const fn tsi() -> Self {
        Self::Tsi { low_period: 13, high_period: 25, price_key: PriceKey::Close }
    }

    pub const fn uo() -> Self {
        Self::Uo {
            short_period: 7,
            medium_period: 14,
            long_period: 28,
            short_weight: 4.0,
            medium_weight: 2.0,
            long_weight: 1.0,
        }
    }

    pub const fn vi() -> Self {
        Self::Vi { period: 14 }
    }

    pub const fn wr() -> Self {
        Self::Wr { period: 14 }
    }

    /// The path segment naming this indicator.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Adi => "adi",
            Self::Adtv { .. } => "adtv",
            Self::Adx { .. } => "adx",
            Self::Ao { .. } => "ao",
            Self::Atr { .. } => "atr",
            Self::Bb { .. } => "bb",
            Self::Cci { .. } => "cci",
            Self::Cmf { .. } => "cmf",
            Self::Dc { .. } => "dc",
            Self::Dpo { .. } => "dpo",
            Self::Eom { .. } => "eom",
            Self::Fi => "fi",
            Self::Ichimoku { .. } => "ichimoku",
            Self::Kc { .. } => "kc",
            Self::Kst { .. } => "kst",
            Self::Macd { .. } => "macd",
            Self::Mfi { .. } => "mfi",
            Self::Mi { .. } => "mi",
            Self::Nvi => "nvi",
            Self::Obv => "obv",
            Self::ObvMean { .. } => "obv_mean",
            Self::Rsi { .. } => "rsi",
            Self::Sma { .. } => "sma",
            Self::Sr { .. } => "sr",
            Self::Trix { .. } => "trix",
            Self::Tsi { .. } => "tsi",
            Self::Uo { .. } => "uo",
            Self::Vi { .. } => "vi",
            Self::Vpt => "vpt",
            Self::Vwap => "vwap",
            Self::Wr { .. } => "wr",
        }
    }

    /// The indicator's own query parameters, in a stable order.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        fn single_period(p: u32) -> Vec<(&'static str, String)> {
            vec![("period", p.to_string())]
        }

        match *self {
            Self::Adi | Self::Fi | Self::Nvi | Self::Obv | Self::Vpt | Self::Vwap => Vec::new(),
            Self::Adtv { period: p }
            | Self::Adx { period: p }
            | Self::Atr { period: p }
            | Self::Cmf { period: p }
            | Self::Eom { period: p }
            | Self::Kc { period: p }
            | Self::Mfi { period: p }
            | Self::ObvMean { period: p }
            | Self::Trix { period: p }
            | Self::Vi { period: p }
            | Self::Wr { period: p } => single_period(p),
            Self::Ao { short_period, long_period } => vec![
                ("short_period", short_period.to_string()),
                ("long_period", long_period.to_string()),
            ],
            Self::Bb { period, standard_deviations, price_key } => vec![
                ("period", period.to_string()),
                ("standard_deviations", standard_deviations.to_string()),
                ("price_key", price_key.to_string()),
            ],
            Self::Cci { period, constant } => vec![
                ("period", period.to_string()),
                ("constant", constant.to_string()),
            ],
            Self::Dc { period, price_key }
            | Self::Dpo { period, price_key }
            | Self::Rsi { period, price_key }
            | Self::Sma { period, price_key } => vec![
                ("period", period.to_string()),
                ("price_key", price_key.to_string()),
            ],
            Self::Ichimoku { low_period, medium_period, high_period } => vec![
                ("low_period", low_period.to_string()),
                ("medium_period", medium_period.to_string()),
                ("high_period", high_period.to_string()),
            ],
            Self::Kst { roclen, smalen, price_key } => {
                const ROCLEN: [&str; 4] = ["roclen1", "roclen2", "roclen3", "roclen4"];
                const SMALEN: [&str; 4] = ["smalen1", "smalen2", "smalen3", "smalen4"];
                let mut out: Vec<(&'static str, String)> = ROCLEN
                    .iter()
                    .zip(roclen)
                    .chain(SMALEN.iter().zip(smalen))
                    .map(|(k, v)| (*k, v.to_string()))
                    .collect();
                out.push(("price_key", price_key.to_string()));
                out
            }
            Self::Macd { fast_period, slow_period, signal_period, price_key } => vec![
                ("fast_period", fast_period.to_string()),
                ("slow_period", slow_period.to_string()),
                ("signal_period", signal_period.to_string()),
                ("price_key", price_key.to_string()),
            ],
            Self::Mi { ema_period, sum_period } => vec![
                ("ema_period", ema_period.to_string()),
                ("sum_period", sum_period.to_string()),
            ],
            Self::Sr { period, signal_period } => vec![
                ("period", period.to_string()),
                ("signal_period", signal_period.to_string()),
            ],
            Self::Tsi { low_period, high_period, price_key } => vec![
                ("low_period", low_period.to_string()),
                ("high_period", high_period.to_string()),
                ("price_key", price_key.to_string()),
            ],
            Self::Uo {
                short_period,
                medium_period,
                long_period,
                short_weight,
                medium_weight,
                long_weight,
            } => vec![
                ("short_period", short_period.to_string()),
                ("medium_period", medium_period.to_string()),
                ("long_period", long_period.to_string()),
                ("short_weight", short_weight.to_string()),
                ("medium_weight", medium_weight.to_string()),
                ("long_weight", long_weight.to_string()),
            ],
        }
    }
}
