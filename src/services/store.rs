// src/services/store.rs

use uuid::Uuid;

use crate::api::{FlagToggle, ResourceApi};
use crate::common::error::AppError;
use crate::models::Identified;

// Cópia local autoritativa da coleção de UM tipo de recurso, pela vida da
// tela. Toda mutação é confirmada: o cliente só escreve no vetor aquilo que
// o servidor devolveu. Invariante: nunca há duas entidades com o mesmo id;
// a ordem é a de chegada, com inserções novas na frente (mais novo primeiro).
pub struct CollectionStore<A: ResourceApi> {
    api: A,
    items: Vec<A::Entity>,
}

impl<A: ResourceApi> CollectionStore<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            items: Vec::new(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn items(&self) -> &[A::Entity] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, id: Uuid) -> Option<&A::Entity> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Busca a coleção completa e substitui a local de uma vez só — um
    /// segundo `load` disparado antes do primeiro terminar resulta em
    /// "última escrita vence", nunca em vetor parcialmente misturado.
    pub async fn load(&mut self, filter: &A::Filter) -> Result<(), AppError> {
        let fresh = self.api.list(filter).await?;
        self.items = fresh;
        Ok(())
    }

    /// Cria no servidor e insere a entidade devolvida na frente da coleção.
    pub async fn add(&mut self, draft: &A::Draft) -> Result<Uuid, AppError> {
        let created = self.api.create(draft).await?;
        let id = created.id();
        self.accept(created);
        Ok(id)
    }

    /// Atualiza no servidor e troca a entidade local correspondente no
    /// lugar. Id ausente da coleção local é erro de lógica, reportado.
    pub async fn apply_update(&mut self, id: Uuid, draft: &A::Draft) -> Result<(), AppError> {
        let updated = self.api.update(id, draft).await?;
        let position = self
            .items
            .iter()
            .position(|item| item.id() == id)
            .ok_or(AppError::MissingLocal(id))?;
        self.items[position] = updated;
        Ok(())
    }

    /// Remove no servidor e na coleção local. Idempotente: remover um id já
    /// removido (inclusive quando o servidor responde 404) é sucesso.
    pub async fn remove(&mut self, id: Uuid) -> Result<(), AppError> {
        match self.api.remove(id).await {
            Ok(()) | Err(AppError::NotFound) => {
                self.items.retain(|item| item.id() != id);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Reconcilia uma entidade vinda do servidor: substitui no lugar quando
    /// o id já existe, senão insere na frente. É isto que mantém o
    /// invariante de id único.
    pub fn accept(&mut self, entity: A::Entity) {
        match self.items.iter().position(|item| item.id() == entity.id()) {
            Some(position) => self.items[position] = entity,
            None => self.items.insert(0, entity),
        }
    }
}

impl<A: FlagToggle> CollectionStore<A> {
    /// Alternância confirmada: o valor novo da flag vem do servidor (que
    /// pode aplicar regras próprias), nunca de um flip local.
    pub async fn toggle(&mut self, id: Uuid) -> Result<(), AppError> {
        let updated = self.api.toggle_flag(id).await?;
        self.accept(updated);
        Ok(())
    }
}
