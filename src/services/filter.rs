// src/services/filter.rs

use std::collections::HashMap;

// Valor sentinela dos seletores de faceta: "all" significa "sem restrição".
pub const FACET_ALL: &str = "all";

/// Descreve como um tipo de recurso participa da busca e das facetas:
/// quais campos entram na busca textual e que valor cada faceta enxerga.
pub trait Filterable {
    /// Campos pesquisáveis, na ordem fixa da tela correspondente.
    fn search_text(&self) -> Vec<&str>;

    /// Valor do campo associado ao nome da faceta ("status", "area"...).
    fn facet(&self, name: &str) -> Option<String>;
}

// Motor puro de filtro: subconjunto visível a partir da coleção completa,
// do termo de busca e do mapa faceta→valor. Seguro para rodar a cada tecla;
// interseção de conjuntos, então a ordem de aplicação não muda o resultado.
pub fn visible_subset<T: Filterable + Clone>(
    items: &[T],
    term: &str,
    facets: &HashMap<String, String>,
) -> Vec<T> {
    let term = term.trim().to_lowercase();

    items
        .iter()
        .filter(|item| matches_term(*item, &term))
        .filter(|item| matches_facets(*item, facets))
        .cloned()
        .collect()
}

fn matches_term<T: Filterable>(item: &T, lowered: &str) -> bool {
    if lowered.is_empty() {
        return true;
    }
    item.search_text()
        .iter()
        .any(|field| field.to_lowercase().contains(lowered))
}

fn matches_facets<T: Filterable>(item: &T, facets: &HashMap<String, String>) -> bool {
    facets.iter().all(|(name, selected)| {
        if selected == FACET_ALL {
            return true;
        }
        // Igualdade exata com o valor do campo; faceta desconhecida não
        // casa com nada.
        item.facet(name).as_deref() == Some(selected.as_str())
    })
}

// --- DESCRITORES POR RECURSO ---
// Os campos pesquisáveis e as facetas de cada tipo, exatamente como cada
// tela os expõe. É o único lugar que conhece esse mapeamento.

mod descriptors {
    use super::Filterable;
    use crate::models::customer::Customer;
    use crate::models::deal::Deal;
    use crate::models::event::Event;
    use crate::models::project::Project;
    use crate::models::property::Property;

    impl Filterable for Property {
        fn search_text(&self) -> Vec<&str> {
            vec![&self.title, &self.address, &self.area]
        }

        fn facet(&self, name: &str) -> Option<String> {
            match name {
                "area" => Some(self.area.clone()),
                "status" => Some(self.status.as_str().to_string()),
                "type" => Some(self.kind.as_str().to_string()),
                _ => None,
            }
        }
    }

    impl Filterable for Customer {
        fn search_text(&self) -> Vec<&str> {
            let mut fields = vec![self.name.as_str(), self.phone.as_str()];
            if let Some(email) = &self.email {
                fields.push(email);
            }
            fields
        }

        fn facet(&self, name: &str) -> Option<String> {
            match name {
                "status" => Some(self.status.as_str().to_string()),
                _ => None,
            }
        }
    }

    impl Filterable for Deal {
        fn search_text(&self) -> Vec<&str> {
            vec![&self.property_title, &self.customer_name]
        }

        fn facet(&self, name: &str) -> Option<String> {
            match name {
                "status" => Some(self.status.as_str().to_string()),
                _ => None,
            }
        }
    }

    impl Filterable for Event {
        fn search_text(&self) -> Vec<&str> {
            vec![&self.title, &self.customer, &self.location]
        }

        fn facet(&self, name: &str) -> Option<String> {
            match name {
                "type" => Some(self.kind.as_str().to_string()),
                "status" => Some(self.status.as_str().to_string()),
                _ => None,
            }
        }
    }

    impl Filterable for Project {
        fn search_text(&self) -> Vec<&str> {
            vec![&self.name, &self.area]
        }

        fn facet(&self, name: &str) -> Option<String> {
            match name {
                "area" => Some(self.area.clone()),
                _ => None,
            }
        }
    }
}
