use uuid::Uuid;

/// Source of identifiers for payments and favorites.
///
/// Implementations must never hand out the same value twice during the lifetime of the
/// service that owns them.
pub trait IdGenerator: Send {
    fn next_id(&mut self) -> String;
}

/// Random v4 UUIDs, the default for [`crate::services::WalletService`]
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> String {
        return Uuid::new_v4().to_string();
    }
}

/// Deterministic `<prefix>-<n>` identifiers, starting from 1
#[derive(Debug, Clone)]
pub struct SequentialGenerator {
    prefix: String,
    last: u64,
}

impl SequentialGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        return Self {
            prefix: prefix.into(),
            last: 0,
        };
    }
}

impl IdGenerator for SequentialGenerator {
    fn next_id(&mut self) -> String {
        self.last += 1;
        return format!("{}-{}", self.prefix, self.last);
    }
}
