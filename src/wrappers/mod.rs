//! Adaptadores para as quatro convenções de chamada.
//!
//! A seleção da convenção acontece em tempo de compilação: cada convenção tem
//! um método dedicado no [`FileCache`], e o closure fonte só é invocado em
//! caso de miss. Para os dois adaptadores de gerador, os itens são repassados
//! ao consumidor conforme são produzidos e a sequência completa só é gravada
//! após o esgotamento da fonte; abandonar a iteração no meio não grava nada.

use std::future::Future;
use std::pin::Pin;

use futures::future::Either;
use futures::stream::{self, Stream, StreamExt};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::cache::{CallArgs, FileCache};
use crate::serializers::{Base64JsonSerializer, Serializer};

impl<S: Serializer> FileCache<S> {
    /// Envolve uma função síncrona.
    ///
    /// Em caso de hit retorna o valor armazenado sem invocar `f`; em caso de
    /// miss invoca `f`, grava o resultado e o retorna.
    pub fn cached<T, F>(&self, func_name: &str, args: &CallArgs, f: F) -> T
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> T,
    {
        let key = self.make_key(func_name, args);
        if let Some(hit) = self.read(&key) {
            return hit;
        }

        let content = f();
        self.write(&key, &content);
        content
    }

    /// Envolve uma função assíncrona.
    ///
    /// Em caso de hit o valor armazenado é retornado sem construir nem
    /// aguardar o future de `f`; em caso de miss o future é aguardado até a
    /// conclusão e o resultado é gravado antes de ser retornado.
    pub async fn cached_async<T, F, Fut>(&self, func_name: &str, args: &CallArgs, f: F) -> T
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let key = self.make_key(func_name, args);
        if let Some(hit) = self.read(&key) {
            return hit;
        }

        let content = f().await;
        self.write(&key, &content);
        content
    }

    /// Envolve um gerador síncrono.
    ///
    /// Em caso de hit produz a sequência armazenada como um iterador
    /// preguiçoso; em caso de miss consome o iterador de `f`, repassando cada
    /// item ao chamador e acumulando-os, e grava a sequência completa apenas
    /// quando a fonte se esgota.
    pub fn cached_iter<'a, T, I, F>(
        &'a self,
        func_name: &str,
        args: &CallArgs,
        f: F,
    ) -> CachedIter<'a, T, I::IntoIter, S>
    where
        T: Clone + Serialize + DeserializeOwned,
        I: IntoIterator<Item = T>,
        F: FnOnce() -> I,
    {
        let key = self.make_key(func_name, args);
        match self.read::<Vec<T>>(&key) {
            Some(items) => CachedIter::Replay(items.into_iter()),
            None => CachedIter::Record {
                source: f().into_iter(),
                buffer: Vec::new(),
                cache: self,
                key,
                done: false,
            },
        }
    }

    /// Envolve um gerador assíncrono.
    ///
    /// Mesmo contrato de [`cached_iter`](Self::cached_iter), sobre um
    /// [`Stream`]: em caso de hit a sequência armazenada é reproduzida
    /// elemento a elemento; em caso de miss a fonte é consumida e repassada, e
    /// a gravação acontece após o esgotamento.
    pub fn cached_stream<'a, T, St, F>(
        &'a self,
        func_name: &str,
        args: &CallArgs,
        f: F,
    ) -> impl Stream<Item = T> + 'a
    where
        T: Clone + Serialize + DeserializeOwned + 'a,
        St: Stream<Item = T> + 'a,
        F: FnOnce() -> St,
    {
        let key = self.make_key(func_name, args);
        match self.read::<Vec<T>>(&key) {
            Some(items) => Either::Left(stream::iter(items)),
            None => {
                let state = RecordState {
                    source: Box::pin(f()),
                    buffer: Vec::new(),
                    cache: self,
                    key,
                };
                Either::Right(stream::unfold(state, |mut state| async move {
                    match state.source.next().await {
                        Some(item) => {
                            state.buffer.push(item.clone());
                            Some((item, state))
                        }
                        None => {
                            state.cache.write(&state.key, &state.buffer);
                            None
                        }
                    }
                }))
            }
        }
    }
}

/// Estado do adaptador de stream no caminho de miss.
struct RecordState<'a, T, St, S> {
    source: Pin<Box<St>>,
    buffer: Vec<T>,
    cache: &'a FileCache<S>,
    key: String,
}

/// Iterador retornado por [`FileCache::cached_iter`].
///
/// A variante de replay percorre a sequência armazenada; a variante de
/// gravação repassa os itens da fonte enquanto os acumula, gravando a
/// sequência completa na primeira vez em que a fonte retorna `None`.
pub enum CachedIter<'a, T, I, S = Base64JsonSerializer> {
    /// Replay da sequência armazenada.
    Replay(std::vec::IntoIter<T>),
    /// Consumo da fonte com gravação após o esgotamento.
    Record {
        source: I,
        buffer: Vec<T>,
        cache: &'a FileCache<S>,
        key: String,
        done: bool,
    },
}

impl<'a, T, I, S> Iterator for CachedIter<'a, T, I, S>
where
    T: Clone + Serialize,
    I: Iterator<Item = T>,
    S: Serializer,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        match self {
            CachedIter::Replay(items) => items.next(),
            CachedIter::Record {
                source,
                buffer,
                cache,
                key,
                done,
            } => match source.next() {
                Some(item) => {
                    buffer.push(item.clone());
                    Some(item)
                }
                None => {
                    // Grava uma única vez, mesmo se next() for chamado de novo
                    if !*done {
                        *done = true;
                        cache.write(key.as_str(), &*buffer);
                    }
                    None
                }
            },
        }
    }
}
