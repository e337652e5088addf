//! Controlador do cache em disco.
//!
//! Este módulo implementa o controlador responsável pelo ciclo de vida do
//! diretório de cache, pela derivação determinística de chaves e pela
//! leitura/escrita de entradas com auto-recuperação de corrupção.

mod controller;
mod key;

pub use controller::FileCache;
pub use key::CallArgs;
