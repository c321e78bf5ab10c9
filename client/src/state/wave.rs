//! Wave page state and its reducer.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the whole UI-state bundle of the client: connected account, the
//! contract's wave count, the wave history, the draft message and whether a
//! submitted wave is still being mined. Wave count and history length can
//! drift apart: the count comes from `getTotalWaves` plus one per live event,
//! the history from one `getAllWaves` fetch plus live appends.

#[cfg(test)]
#[path = "wave_test.rs"]
mod wave_test;

pub use contract::WaveRecord;

/// Whether a submitted wave transaction is waiting to be mined.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum MiningStatus {
    #[default]
    Idle,
    /// Accepted by the wallet, not yet confirmed.
    Mining { tx_hash: String },
}

/// All state rendered by the wave page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WaveState {
    /// Active wallet account; `None` until authorization is found or granted.
    pub account: Option<String>,
    /// Total waves according to the contract, bumped locally per live event.
    pub wave_count: u64,
    /// Wave history in emission order: fetched batch first, then live appends.
    pub waves: Vec<WaveRecord>,
    /// Text typed into the message box, not yet submitted.
    pub draft: String,
    pub mining: MiningStatus,
}

/// One state transition. Produced by session operations and UI handlers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WaveEvent {
    /// Wallet reported an authorized account.
    AccountAdopted(String),
    /// `getTotalWaves` returned.
    WaveCountLoaded(u64),
    /// `getAllWaves` returned; replaces the whole history.
    HistoryLoaded(Vec<WaveRecord>),
    /// A `NewWave` notification arrived.
    NewWave(WaveRecord),
    DraftEdited(String),
    /// The wallet accepted the `wave` transaction.
    MiningStarted { tx_hash: String },
    /// The `wave` transaction was mined.
    WaveConfirmed,
}

impl WaveState {
    /// Apply one event.
    pub fn apply(&mut self, event: WaveEvent) {
        match event {
            WaveEvent::AccountAdopted(account) => self.account = Some(account),
            WaveEvent::WaveCountLoaded(count) => self.wave_count = count,
            WaveEvent::HistoryLoaded(waves) => self.waves = waves,
            WaveEvent::NewWave(record) => {
                self.waves.push(record);
                self.wave_count = self.wave_count.saturating_add(1);
            }
            WaveEvent::DraftEdited(text) => self.draft = text,
            WaveEvent::MiningStarted { tx_hash } => self.mining = MiningStatus::Mining { tx_hash },
            WaveEvent::WaveConfirmed => {
                self.mining = MiningStatus::Idle;
                self.draft.clear();
            }
        }
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.account.is_some()
    }

    #[must_use]
    pub fn is_mining(&self) -> bool {
        matches!(self.mining, MiningStatus::Mining { .. })
    }

    /// History for display, most recent first.
    pub fn waves_newest_first(&self) -> impl Iterator<Item = &WaveRecord> {
        self.waves.iter().rev()
    }
}
