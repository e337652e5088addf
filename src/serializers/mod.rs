//! Serializers plugáveis para o conteúdo das entradas.
//!
//! Um [`Serializer`] converte resultados de chamadas de/para bytes
//! armazenáveis. O padrão, [`Base64JsonSerializer`], codifica o grafo de
//! objetos via JSON e envolve o resultado em base64, de modo que os arquivos
//! de entrada são texto imprimível e sobrevivem a transportes que assumem
//! conteúdo textual.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::types::errors::CacheResult;

/// Capacidade de serialização de entradas de cache.
///
/// Qualquer implementação com estas duas operações é substituível sem
/// mudanças no controlador.
pub trait Serializer {
    /// Converte um valor em bytes armazenáveis.
    fn encode<T: Serialize>(&self, value: &T) -> CacheResult<Vec<u8>>;

    /// Reconstrói um valor a partir dos bytes armazenados.
    fn decode<T: DeserializeOwned>(&self, blob: &[u8]) -> CacheResult<T>;
}

/// Serializer padrão: JSON envolvido em base64.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64JsonSerializer;

impl Serializer for Base64JsonSerializer {
    fn encode<T: Serialize>(&self, value: &T) -> CacheResult<Vec<u8>> {
        let blob = serde_json::to_vec(value)?;
        Ok(BASE64.encode(blob).into_bytes())
    }

    fn decode<T: DeserializeOwned>(&self, blob: &[u8]) -> CacheResult<T> {
        let decoded = BASE64.decode(blob)?;
        Ok(serde_json::from_slice(&decoded)?)
    }
}
