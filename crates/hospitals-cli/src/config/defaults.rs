/// Values used for every option left off the command line.
pub struct DefaultsConfig {
    pub height: usize,
    pub width: usize,
    pub hospitals: usize,
    pub houses: usize,
    pub restarts: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            height: 10,
            width: 20,
            hospitals: 3,
            houses: 15,
            restarts: 20,
        }
    }
}
