//! ssmenv - Render AWS SSM Parameter Store paths into config files.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── mod           # Argument parsing and style dispatch
//! │   ├── completions   # Shell completions
//! │   └── output        # Terminal error/hint helpers
//! └── core/             # Core library components
//!     ├── store/        # Parameter store backends
//!     │   ├── mod       # ParameterStore trait, Parameter, Page
//!     │   ├── ssm       # AWS SSM implementation
//!     │   └── memory    # In-memory implementation for tests
//!     ├── walk          # Lazy paginated walk over store paths
//!     ├── key           # Parameter name -> emission key parsing
//!     └── emit/         # Output serializers
//!         ├── env       # bash / dotenv / docker
//!         ├── ini       # INI sections
//!         ├── java      # Java .properties
//!         └── dir       # One file per parameter
//! ```
//!
//! # Features
//!
//! - Paginated, best-effort walking of one or more store paths
//! - SecureString decryption with redacted logging
//! - Four output encodings selected by a single style flag
//! - Traversal-safe per-parameter file output

pub mod cli;
pub mod core;
pub mod error;
