//! Terminal interface for Consulta's process lookups.

use anyhow::Context;
use clap::{Parser, Subcommand};

use consulta_client::jusbrasil::{DEFAULT_PAGE_SIZE, DEFAULT_SEGMENT, has_case};
use consulta_client::{DatajudClient, JusbrasilClient, first_hit, search_with_fallback};
use consulta_core::{
    DEFAULT_PRIORITY, ProcessRecord, Tribunal, lawsuit_entries, render_lawsuit_list,
    render_process_summary,
};

#[derive(Parser)]
#[command(name = "consulta", version, about = "Consulta de processos públicos")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Look up a case on DataJud in a known tribunal.
    Processo {
        /// CNJ case number.
        numero: String,
        /// Tribunal code (e.g. TJSP).
        tribunal: Tribunal,
        #[arg(long, env = "DATAJUD_API_KEY", hide_env_values = true)]
        datajud_api_key: String,
    },
    /// Sweep every tribunal on DataJud until the case is found.
    ProcessoAuto {
        /// CNJ case number.
        numero: String,
        #[arg(long, env = "DATAJUD_API_KEY", hide_env_values = true)]
        datajud_api_key: String,
    },
    /// Search lawsuits by CPF/CNPJ on Jusbrasil.
    Documento {
        /// Document number (CPF or CNPJ, punctuation allowed).
        documento: String,
        #[arg(long, default_value = "")]
        cursor: String,
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        size: u32,
        #[arg(long, default_value = DEFAULT_SEGMENT)]
        segment: String,
        #[arg(long, env = "JUSBRASIL_API_KEY", hide_env_values = true)]
        jusbrasil_api_key: String,
    },
    /// Look up a single case by CNJ number on Jusbrasil's base-judicial API.
    Cnj {
        /// CNJ case number.
        numero: String,
        #[arg(long, env = "JUSBRASIL_API_KEY", hide_env_values = true)]
        jusbrasil_api_key: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Summaries go to stdout; keep log lines out of them.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    match cli.command {
        Command::Processo {
            numero,
            tribunal,
            datajud_api_key,
        } => {
            let client = DatajudClient::new(datajud_api_key);
            let raw = client
                .search_by_cnj(&numero, tribunal)
                .await
                .context("consulta ao DataJud falhou")?;
            let record = first_hit(&raw).map(ProcessRecord::from_single_case);
            println!("{}", render_process_summary(record.as_ref()));
        }
        Command::ProcessoAuto {
            numero,
            datajud_api_key,
        } => {
            let client = DatajudClient::new(datajud_api_key);
            let (record, tribunal) =
                search_with_fallback(&client, &numero, &DEFAULT_PRIORITY).await?;
            println!("{}", render_process_summary(Some(&record)));
            println!("\n(encontrado via {tribunal})");
        }
        Command::Documento {
            documento,
            cursor,
            size,
            segment,
            jusbrasil_api_key,
        } => {
            let client = JusbrasilClient::new(jusbrasil_api_key);
            let raw = client
                .lawsuits_by_document(&documento, &cursor, size, &segment)
                .await
                .context("consulta ao Jusbrasil falhou")?;
            println!("{}", render_lawsuit_list(&lawsuit_entries(&raw)));
        }
        Command::Cnj {
            numero,
            jusbrasil_api_key,
        } => {
            let client = JusbrasilClient::new(jusbrasil_api_key);
            let raw = client
                .case_by_cnj(&numero)
                .await
                .context("consulta à base judicial falhou")?;
            let record = has_case(&raw).then(|| ProcessRecord::from_single_case(&raw));
            println!("{}", render_process_summary(record.as_ref()));
        }
    }

    Ok(())
}
