//! Leitura e escrita de entradas de cache em disco.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::serializers::{Base64JsonSerializer, Serializer};
use crate::types::config::CacheConfig;
use crate::types::errors::{CacheError, CacheResult};

use super::key::{self, CallArgs};

/// Cache de resultados de função persistido em disco.
///
/// Cada entrada é um arquivo plano nomeado pela chave SHA-256 da chamada,
/// contendo a saída do [`Serializer`]. Entradas nunca expiram automaticamente;
/// uma entrada corrompida é removida e tratada como miss na próxima leitura.
///
/// Não há coordenação de concorrência: escritores concorrentes para a mesma
/// chave competem e a última escrita vence.
pub struct FileCache<S = Base64JsonSerializer> {
    cache_dir: PathBuf,
    is_method: bool,
    serializer: S,
}

impl FileCache {
    /// Cria um cache com o serializer padrão.
    ///
    /// Resolve o diretório efetivo (diretório base mais os segmentos do
    /// namespace) e cria os segmentos ausentes. Esta é a única operação do
    /// cache autorizada a falhar de forma visível: sem um diretório utilizável
    /// o cache não pode ser estabelecido.
    pub fn new(config: CacheConfig) -> CacheResult<Self> {
        Self::with_serializer(config, Base64JsonSerializer)
    }
}

impl<S: Serializer> FileCache<S> {
    /// Cria um cache com um serializer alternativo.
    pub fn with_serializer(config: CacheConfig, serializer: S) -> CacheResult<Self> {
        let base = match config.cache_dir {
            Some(dir) => dir,
            None => dirs::cache_dir()
                .ok_or_else(|| {
                    CacheError::no_cache_dir("diretório de cache da plataforma não encontrado")
                })?
                .join("anycache"),
        };

        let mut cache_dir = base;
        if let Some(namespace) = &config.namespace {
            for segment in namespace.split('.').filter(|s| !s.is_empty()) {
                cache_dir.push(segment);
            }
        }

        fs::create_dir_all(&cache_dir)?;

        Ok(Self {
            cache_dir,
            is_method: config.is_method,
            serializer,
        })
    }

    /// Diretório efetivo onde as entradas são gravadas.
    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Deriva a chave de cache para uma chamada.
    pub fn make_key(&self, func_name: &str, args: &CallArgs) -> String {
        key::derive(func_name, args, self.is_method)
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.cache_dir.join(key)
    }

    /// Lê a entrada para `key`.
    ///
    /// Retorna `None` se não existe arquivo para a chave. Se o arquivo existe
    /// mas a leitura ou a decodificação falha, o arquivo é removido e `None` é
    /// retornado: uma entrada corrompida é um miss, nunca um erro visível ao
    /// chamador.
    pub fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.entry_path(key);
        if !path.exists() {
            return None;
        }

        let decoded = fs::read(&path)
            .map_err(CacheError::from)
            .and_then(|blob| self.serializer.decode(&blob));

        match decoded {
            Ok(content) => {
                tracing::info!("Resource {} loaded from cache", key);
                Some(content)
            }
            Err(exc) => {
                // Remove o arquivo corrompido
                let _ = fs::remove_file(&path);
                tracing::warn!("Failed to read a corrupted file from cache: {}", exc);
                None
            }
        }
    }

    /// Grava `content` como a entrada para `key`, sobrescrevendo qualquer
    /// entrada anterior.
    ///
    /// Falhas de serialização ou de escrita são engolidas (apenas logadas) e o
    /// arquivo parcial é removido: uma escrita falhada nunca impede o
    /// resultado recém-computado de chegar ao chamador.
    pub fn write<T: Serialize>(&self, key: &str, content: &T) {
        let path = self.entry_path(key);

        let written = self
            .serializer
            .encode(content)
            .and_then(|blob| fs::write(&path, blob).map_err(CacheError::from));

        match written {
            Ok(()) => tracing::info!("Resource {} saved to cache", key),
            Err(exc) => {
                let _ = fs::remove_file(&path);
                tracing::info!("Failed to write to cache: {}", exc);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn test_cache(dir: &tempfile::TempDir) -> FileCache {
        FileCache::new(CacheConfig::at(dir.path())).expect("cache dir should be usable")
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let cache = test_cache(&dir);
        let key = cache.make_key("fn", &CallArgs::new().arg(3));

        cache.write(&key, &vec![3, 4, 5]);

        let read: Option<Vec<i32>> = cache.read(&key);
        assert_eq!(read, Some(vec![3, 4, 5]));
    }

    #[test]
    fn test_read_absent_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let cache = test_cache(&dir);

        let read: Option<i32> = cache.read(&cache.make_key("fn", &CallArgs::new()));
        assert_eq!(read, None);
    }

    #[test]
    fn test_write_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let cache = test_cache(&dir);
        let key = cache.make_key("fn", &CallArgs::new().arg(1));

        cache.write(&key, &"content");
        cache.write(&key, &"content");

        let read: Option<String> = cache.read(&key);
        assert_eq!(read.as_deref(), Some("content"));
    }

    #[test]
    fn test_corrupted_entry_is_removed() {
        let dir = tempfile::tempdir().unwrap();
        let cache = test_cache(&dir);
        let key = cache.make_key("fn", &CallArgs::new().arg(1));

        cache.write(&key, &42);
        let path = dir.path().join(&key);
        fs::write(&path, b"not base64 at all!!").unwrap();

        // Entrada corrompida vira miss e o arquivo é removido
        let read: Option<i32> = cache.read(&key);
        assert_eq!(read, None);
        assert!(!path.exists());
    }

    #[test]
    fn test_namespace_maps_to_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        let cache =
            FileCache::new(CacheConfig::at(dir.path()).namespace("project.module")).unwrap();

        assert_eq!(cache.cache_dir(), dir.path().join("project").join("module"));
        assert!(cache.cache_dir().is_dir());
    }

    #[test]
    fn test_unusable_directory_fails_construction() {
        let dir = tempfile::tempdir().unwrap();
        // Um arquivo no lugar do diretório torna create_dir_all impossível
        let blocked = dir.path().join("blocked");
        fs::write(&blocked, b"file").unwrap();

        let result = FileCache::new(CacheConfig::at(&blocked));
        assert!(matches!(result, Err(CacheError::Io(_))));
    }
}
