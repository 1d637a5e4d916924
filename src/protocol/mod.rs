//! Data side of the external move-search engine boundary.
//!
//! The engine is driven with two command lines per search:
//!
//! ```text
//! position startpos moves a7 g1 d7
//! go wtime 60000 btime 60000
//! ```
//!
//! and answers with `bestmove <move>` or `bestmove none`. Session lines
//! (`newgame`, `setoption`, the `isready`/`readyok` handshake, `stop` and
//! `quit`) are built by `EngineCommand`. Process handling
//! is left to the driver; this module only builds and parses the lines and
//! checks the reply against the rules engine.
//!
//! ## Example
//!
//! ```
//! use muhle_rules::core::Variant;
//! use muhle_rules::protocol::{EngineReply, SearchBudget, SearchRequest};
//! use muhle_rules::rules::GameState;
//!
//! let mut game = GameState::new(Variant::Nine);
//! let request = SearchRequest::from_game(&game, SearchBudget::unlimited().with_max_depth(6));
//! assert_eq!(request.commands(), ["position startpos", "go maxdepth 6"]);
//!
//! let reply = EngineReply::parse("bestmove d5").unwrap();
//! let mv = game.confirm_engine_reply(reply).unwrap().unwrap();
//! game.apply_move(mv).unwrap();
//! ```

pub mod command;
pub mod reply;
pub mod request;

pub use command::{is_ready_ok, EngineCommand, READY_OK};
pub use reply::{EngineReply, NO_MOVE};
pub use request::{SearchBudget, SearchRequest};
