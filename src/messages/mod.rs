//! User-facing strings (Brazilian Portuguese).

pub const SEARCH_PLACEHOLDER: &str = "Pesquise uma raça";
pub const SEARCH_BUTTON: &str = "Pesquisa Dogg";
pub const SEARCHING: &str = "Pesquisando...";
pub const BACK_BUTTON: &str = "← Voltar";
pub const RESULTS_HEADING: &str = "Exibindo fotos de:";
pub const IMAGE_ALT: &str = "Dog";

/// Shown when the request itself failed or the body could not be read.
pub const SEARCH_FAILED: &str = "Erro ao buscar.";

pub fn breed_not_found(breed: &str) -> String {
    format!("Raça \"{breed}\" não encontrada.")
}
