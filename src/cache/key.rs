//! Derivação de chaves de cache.

use std::collections::BTreeMap;
use std::fmt::Display;

use sha2::{Digest, Sha256};

/// Argumentos de uma chamada, na forma textual usada para derivar a chave.
///
/// Valores posicionais e nomeados são renderizados via [`Display`] no momento
/// da inserção. A renderização textual é deliberada: dois valores distintos
/// com a mesma renderização colidem na mesma chave, e trocá-la por um hash
/// estrutural invalidaria entradas já gravadas.
#[derive(Debug, Clone, Default)]
pub struct CallArgs {
    positional: Vec<String>,
    keyword: BTreeMap<String, String>,
}

impl CallArgs {
    /// Cria um conjunto vazio de argumentos.
    pub fn new() -> Self {
        Self::default()
    }

    /// Acrescenta um argumento posicional.
    #[must_use]
    pub fn arg(mut self, value: impl Display) -> Self {
        self.positional.push(value.to_string());
        self
    }

    /// Acrescenta um argumento nomeado.
    #[must_use]
    pub fn kwarg(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.keyword.insert(name.into(), value.to_string());
        self
    }
}

/// Deriva a chave de cache para uma chamada.
///
/// A chave é o hex de um SHA-256 sobre `nome:posicionais:nomeados`, onde os
/// posicionais são unidos por `_`, os nomeados são pares `chave=valor`
/// ordenados por chave e unidos por `_`, e componentes vazios são omitidos da
/// junção. Quando `is_method` é verdadeiro o primeiro posicional (o receptor)
/// é ignorado.
pub(crate) fn derive(func_name: &str, args: &CallArgs, is_method: bool) -> String {
    let skip = usize::from(is_method);
    let positional = args
        .positional
        .iter()
        .skip(skip)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("_");
    let keyword = args
        .keyword
        .iter()
        .map(|(name, value)| format!("{}={}", name, value))
        .collect::<Vec<_>>()
        .join("_");

    let parts = [func_name, positional.as_str(), keyword.as_str()];
    let joined = parts
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(":");

    let mut hasher = Sha256::new();
    hasher.update(joined.as_bytes());
    hex::encode(hasher.finalize())
}
