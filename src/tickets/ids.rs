//! Ticket id generation

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

const TICKET_ID_LEN: usize = 8;

/// Where ticket ids come from.
///
/// `Seeded` makes ids reproducible across runs with the same seed.
#[derive(Debug)]
pub enum TicketIdSource {
    Random,
    Seeded(Mutex<StdRng>),
}

impl TicketIdSource {
    pub fn random() -> Self {
        TicketIdSource::Random
    }

    pub fn seeded(seed: u64) -> Self {
        TicketIdSource::Seeded(Mutex::new(StdRng::seed_from_u64(seed)))
    }

    /// Short uppercase token, e.g. `3F2A9C1B`
    pub fn next_id(&self) -> String {
        let uuid = match self {
            TicketIdSource::Random => Uuid::new_v4(),
            TicketIdSource::Seeded(rng) => {
                let mut bytes = [0u8; 16];
                rng.lock().fill(&mut bytes[..]);
                uuid::Builder::from_random_bytes(bytes).into_uuid()
            }
        };

        let mut id = uuid.simple().to_string();
        id.truncate(TICKET_ID_LEN);
        id.to_uppercase()
    }
}

impl Default for TicketIdSource {
    fn default() -> Self {
        Self::random()
    }
}
