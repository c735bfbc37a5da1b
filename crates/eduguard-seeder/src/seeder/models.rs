/// What goes into the initial roster.
#[derive(Clone, Debug)]
pub struct SeedConfig {
    pub sample_roster: bool,
    pub extra_students: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            sample_roster: true,
            extra_students: 0,
        }
    }
}
