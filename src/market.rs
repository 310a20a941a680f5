//! Simulated market-sentiment data feeds.
//!
//! The dashboard sitting above the backdrop shows mock coin prices and
//! sentiment scores that drift on a timer. Each feed is an independent
//! periodic task owning its own bounded random-walk state and broadcasting
//! snapshots over a channel - consumers never share mutable state with the
//! task, they just receive values.
//!
//! # Example
//!
//! ```ignore
//! use std::time::Duration;
//! use driftfield::market::Feed;
//!
//! let feed = Feed::spawn(Duration::from_secs(5));
//! for snapshot in feed.updates().iter().take(3) {
//!     println!("BTC sentiment: {}", snapshot[0].sentiment);
//! }
//! // Dropping the feed stops its task.
//! ```

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

/// Short-term direction derived from a sentiment score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prediction {
    Up,
    Down,
    Neutral,
}

impl Prediction {
    /// Bullish above 70, bearish below 40, neutral between.
    pub fn from_sentiment(sentiment: u8) -> Self {
        if sentiment > 70 {
            Prediction::Up
        } else if sentiment < 40 {
            Prediction::Down
        } else {
            Prediction::Neutral
        }
    }
}

/// One coin's snapshot as shown in the ticker and trending list.
#[derive(Debug, Clone, PartialEq)]
pub struct Coin {
    pub id: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
    /// Spot price in USD, rounded to cents.
    pub price: f64,
    /// 24 h change in percent, rounded to two decimals.
    pub change_24h: f64,
    /// Sentiment score, always within `0..=100`.
    pub sentiment: u8,
    pub prediction: Prediction,
}

impl Coin {
    const fn new(
        id: &'static str,
        symbol: &'static str,
        name: &'static str,
        price: f64,
        change_24h: f64,
        sentiment: u8,
        prediction: Prediction,
    ) -> Self {
        Self {
            id,
            symbol,
            name,
            price,
            change_24h,
            sentiment,
            prediction,
        }
    }

    /// One bounded random-walk step.
    ///
    /// Price drifts by at most ±0.5 %, the 24 h change by ±0.1 points, and
    /// sentiment by an integer in `-2..=2` clamped to `0..=100`. The
    /// prediction is re-derived from the new sentiment.
    pub fn step(&mut self, rng: &mut impl Rng) {
        self.price = round2(self.price * (1.0 + rng.gen_range(-0.005..0.005)));
        self.change_24h = round2(self.change_24h + rng.gen_range(-0.1..0.1));
        let delta = rng.gen_range(-2i16..=2);
        self.sentiment = (self.sentiment as i16 + delta).clamp(0, 100) as u8;
        self.prediction = Prediction::from_sentiment(self.sentiment);
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// The mock coin table every feed starts from.
pub fn listed_coins() -> Vec<Coin> {
    vec![
        Coin::new("bitcoin", "BTC", "Bitcoin", 62354.23, 2.34, 78, Prediction::Up),
        Coin::new("ethereum", "ETH", "Ethereum", 3456.78, -1.2, 65, Prediction::Up),
        Coin::new("solana", "SOL", "Solana", 142.58, 5.67, 82, Prediction::Up),
        Coin::new("cardano", "ADA", "Cardano", 0.543, -0.87, 48, Prediction::Down),
        Coin::new("xrp", "XRP", "XRP", 0.543, 1.23, 55, Prediction::Neutral),
        Coin::new("polkadot", "DOT", "Polkadot", 7.32, -2.45, 42, Prediction::Down),
        Coin::new("avalanche", "AVAX", "Avalanche", 35.78, 3.56, 75, Prediction::Up),
        Coin::new("binancecoin", "BNB", "Binance Coin", 598.45, 0.34, 60, Prediction::Neutral),
    ]
}

/// One point of a historical sentiment series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentPoint {
    /// How many days before "today" this point sits.
    pub days_ago: u32,
    /// Sentiment score within `20..=95`.
    pub sentiment: u8,
    pub price: f64,
}

/// Generate a `days + 1` point sentiment history, oldest first.
///
/// A random walk starting in `[40, 70)`, stepping by at most ±5 and clamped
/// to `[20, 95]` - the range the dashboard's trend chart expects.
pub fn sentiment_series(days: u32, rng: &mut impl Rng) -> Vec<SentimentPoint> {
    let mut sentiment: f64 = rng.gen_range(40.0..70.0);
    (0..=days)
        .rev()
        .map(|days_ago| {
            sentiment = (sentiment + rng.gen_range(-5.0..5.0)).clamp(20.0, 95.0);
            SentimentPoint {
                days_ago,
                sentiment: sentiment.round() as u8,
                price: (rng.gen_range(0.0_f64..5000.0) + 45000.0).round() / 100.0,
            }
        })
        .collect()
}

/// A periodic market feed running on its own thread.
///
/// The task owns the coin table exclusively; every `interval` it steps each
/// coin's random walk and sends a fresh snapshot. Dropping the handle stops
/// the task and joins it.
pub struct Feed {
    updates: Receiver<Vec<Coin>>,
    stop: Sender<()>,
    handle: Option<thread::JoinHandle<()>>,
}

impl Feed {
    /// Spawn a feed stepping every `interval`.
    pub fn spawn(interval: Duration) -> Self {
        Self::spawn_seeded(interval, rand::random())
    }

    /// Spawn a feed with a deterministic random source.
    pub fn spawn_seeded(interval: Duration, seed: u64) -> Self {
        let (update_tx, update_rx) = mpsc::channel();
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let handle = thread::spawn(move || {
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut coins = listed_coins();
            loop {
                match stop_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => {}
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
                for coin in &mut coins {
                    coin.step(&mut rng);
                }
                if update_tx.send(coins.clone()).is_err() {
                    break;
                }
            }
        });

        Self {
            updates: update_rx,
            stop: stop_tx,
            handle: Some(handle),
        }
    }

    /// The snapshot channel. Each received value is a full coin table.
    pub fn updates(&self) -> &Receiver<Vec<Coin>> {
        &self.updates
    }

    /// Drain the channel and return the newest snapshot, if any arrived.
    pub fn try_latest(&self) -> Option<Vec<Coin>> {
        self.updates.try_iter().last()
    }
}

impl Drop for Feed {
    fn drop(&mut self) {
        let _ = self.stop.send(());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listed_coins_match_the_mock_table() {
        let coins = listed_coins();
        assert_eq!(coins.len(), 8);
        assert_eq!(coins[0].symbol, "BTC");
        assert_eq!(coins[0].price, 62354.23);
        assert_eq!(coins[3].prediction, Prediction::Down);
    }

    #[test]
    fn prediction_thresholds() {
        assert_eq!(Prediction::from_sentiment(71), Prediction::Up);
        assert_eq!(Prediction::from_sentiment(70), Prediction::Neutral);
        assert_eq!(Prediction::from_sentiment(40), Prediction::Neutral);
        assert_eq!(Prediction::from_sentiment(39), Prediction::Down);
    }

    #[test]
    fn random_walk_stays_bounded() {
        let mut rng = SmallRng::seed_from_u64(11);
        let mut coin = listed_coins().remove(0);
        for _ in 0..10_000 {
            let before = coin.clone();
            coin.step(&mut rng);
            assert!(coin.sentiment <= 100);
            assert!((coin.price / before.price - 1.0).abs() < 0.006);
            assert!((coin.change_24h - before.change_24h).abs() < 0.11);
        }
    }

    #[test]
    fn sentiment_series_is_clamped_and_ordered() {
        let mut rng = SmallRng::seed_from_u64(5);
        let series = sentiment_series(30, &mut rng);
        assert_eq!(series.len(), 31);
        assert_eq!(series[0].days_ago, 30);
        assert_eq!(series[30].days_ago, 0);
        for point in &series {
            assert!((20..=95).contains(&point.sentiment));
            assert!(point.price >= 450.0 && point.price <= 500.0);
        }
    }

    #[test]
    fn feed_delivers_snapshots_and_stops_on_drop() {
        let feed = Feed::spawn_seeded(Duration::from_millis(1), 42);
        let snapshot = feed
            .updates()
            .recv_timeout(Duration::from_secs(5))
            .expect("feed should deliver");
        assert_eq!(snapshot.len(), 8);
        for coin in &snapshot {
            assert!(coin.sentiment <= 100);
        }
        drop(feed); // joins the task
    }

    #[test]
    fn seeded_feeds_are_deterministic() {
        let a = Feed::spawn_seeded(Duration::from_millis(1), 7);
        let b = Feed::spawn_seeded(Duration::from_millis(1), 7);
        let first_a = a.updates().recv_timeout(Duration::from_secs(5)).unwrap();
        let first_b = b.updates().recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(first_a, first_b);
    }
}
