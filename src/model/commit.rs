use git2::Oid;

/// Commit metadata as read from the object store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    pub id: Oid,
    pub tree_id: Oid,
    /// Commit time in seconds since the Unix epoch
    pub time: i64,
    /// Author in `Name <email>` form
    pub author: String,
    pub message: String,
    pub parents: Vec<Oid>,
}

impl CommitInfo {
    /// Hex representation of the commit id
    pub fn id_hex(&self) -> String {
        self.id.to_string()
    }
}

/// A ref name together with the commit time it peels to, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefInfo {
    pub name: String,
    pub commit_time: Option<i64>,
}
