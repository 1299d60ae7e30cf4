//! Router addressing

/// Origin or destination of a routed message
///
/// `group_id` is the MAVLink system id of the peer, `instance_id` its
/// component id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SparseAddress {
    pub group_id: u8,
    pub instance_id: u8,
}

impl SparseAddress {
    pub fn new(group_id: u8, instance_id: u8) -> Self {
        Self {
            group_id,
            instance_id,
        }
    }
}

impl std::fmt::Display for SparseAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.group_id, self.instance_id)
    }
}
