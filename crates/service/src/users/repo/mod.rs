pub mod memory;
pub mod seaorm;

pub use memory::MemoryUserStore;
pub use seaorm::SeaOrmUserStore;
