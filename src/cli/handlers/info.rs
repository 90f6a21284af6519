//! Information display handlers (stats, sections, config)

use crate::cli::output::*;
use crate::AppConfig;
use crate::RagService;
use crate::Result;

pub fn handle_info(service: &RagService) -> Result<()> {
    print_knowledge_info(service.corpus(), service.index().vocabulary_size());
    Ok(())
}

pub fn handle_section(service: &RagService, name: Option<&str>) -> Result<()> {
    match name {
        Some(name) => {
            let sentences = service.section(name)?;
            print_section(name, sentences);
        }
        None => print_section_list(service.corpus()),
    }
    Ok(())
}

pub fn handle_config_command(config: &AppConfig) -> Result<()> {
    print_config(config);
    Ok(())
}
