//! Tipos de erro do Anycache.

use thiserror::Error;

/// Tipo de resultado padrão do Anycache.
pub type CacheResult<T> = Result<T, CacheError>;

/// Erros possíveis no Anycache.
///
/// O único erro que escapa da camada de cache é a falha ao estabelecer o
/// diretório de armazenamento na construção; todos os demais são tratados
/// localmente (entrada removida, chamada tratada como miss).
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Erro de IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erro de JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Erro ao decodificar base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Erro de serialização: {0}")]
    Serialization(String),

    #[error("Diretório de cache indisponível: {0}")]
    NoCacheDir(String),
}

impl CacheError {
    /// Cria um erro de serialização genérico.
    pub fn serialization<S: Into<String>>(msg: S) -> Self {
        Self::Serialization(msg.into())
    }

    /// Cria um erro de diretório de cache indisponível.
    pub fn no_cache_dir<S: Into<String>>(msg: S) -> Self {
        Self::NoCacheDir(msg.into())
    }
}
