//! # Anycache
//!
//! Cache em disco para resultados de funções.
//!
//! Cada resultado é persistido em um arquivo nomeado por um hash SHA-256 do
//! nome da função e dos argumentos da chamada, de modo que chamadas repetidas
//! com os mesmos argumentos evitam recomputação, inclusive entre execuções do
//! processo.
//!
//! Quatro convenções de chamada são suportadas:
//!
//! - funções síncronas ([`FileCache::cached`])
//! - geradores síncronos ([`FileCache::cached_iter`])
//! - funções assíncronas ([`FileCache::cached_async`])
//! - geradores assíncronos ([`FileCache::cached_stream`])
//!
//! ## Módulos
//!
//! - [`cache`] - Controlador do cache (diretórios, chaves, leitura/escrita)
//! - [`serializers`] - Serializer plugável (encode/decode)
//! - [`wrappers`] - Adaptadores para as quatro convenções de chamada
//! - [`types`] - Tipos compartilhados
//!
//! ## Exemplo
//!
//! ```no_run
//! use anycache::{CacheConfig, CallArgs, FileCache};
//!
//! fn main() -> anycache::CacheResult<()> {
//!     let cache = FileCache::new(CacheConfig::default())?;
//!
//!     let value = cache.cached("fibonacci", &CallArgs::new().arg(30), || {
//!         // computação cara executada apenas no primeiro miss
//!         832_040_u64
//!     });
//!     assert_eq!(value, 832_040);
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod serializers;
pub mod types;
pub mod wrappers;

pub use cache::{CallArgs, FileCache};
pub use serializers::{Base64JsonSerializer, Serializer};
pub use types::config::CacheConfig;
pub use types::errors::{CacheError, CacheResult};
pub use wrappers::CachedIter;
