use clap::{Args, Parser, Subcommand};
use contactform_lib::{FieldId, FormValidator};

#[derive(Parser)]
#[command(name = "contactform-cli")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Commands>,

    /// affiche les logs sur stderr (feature `with-tracing`)
    #[arg(long)]
    pub verbose: bool,
}

/// Valeurs des champs, une option par `<input>`.
#[derive(Args, Debug, Clone, Default)]
pub struct FormArgs {
    #[arg(long, default_value = "")]
    pub name: String,
    /// téléphone (les non-chiffres sont retirés)
    #[arg(long, default_value = "")]
    pub number: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub empresa: String,
    /// localisation de l'entreprise (`empresaGPS`)
    #[arg(long = "empresa-gps", default_value = "")]
    pub empresa_gps: String,
    /// service choisi dans la modale (`campoFormulario`)
    #[arg(long, default_value = "")]
    pub servico: String,
}

impl FormArgs {
    pub fn to_form(&self) -> FormValidator {
        let mut form = FormValidator::contact_form();
        form.set_value(FieldId::Name, self.name.as_str());
        form.set_value(FieldId::Number, self.number.as_str());
        form.set_value(FieldId::Email, self.email.as_str());
        form.set_value(FieldId::Empresa, self.empresa.as_str());
        form.set_value(FieldId::EmpresaGps, self.empresa_gps.as_str());
        form.set_value(FieldId::CampoFormulario, self.servico.as_str());
        form
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// valide tout le formulaire
    Validate {
        #[command(flatten)]
        form: FormArgs,
        /// format: human|json
        #[arg(long, default_value = "human")]
        format: String,
    },
    /// valide un seul champ par son id DOM (name, number, email, empresa, empresaGPS, campoFormulario)
    Check {
        field: String,
        value: String,
        /// le champ peut rester vide
        #[arg(long)]
        optional: bool,
    },
    /// affiche les paramètres du template e-mail (JSON, feature `with-serde`)
    Payload {
        #[command(flatten)]
        form: FormArgs,
    },
    /// rejoue un envoi complet contre un service e-mail simulé
    Simulate {
        #[command(flatten)]
        form: FormArgs,
        /// latence du service simulé
        #[arg(long = "latency-ms", default_value_t = 300)]
        latency_ms: u64,
        /// le service simulé refuse l'envoi
        #[arg(long)]
        fail: bool,
        /// délai maximal avant échec
        #[arg(long = "timeout-ms", default_value_t = 5_000)]
        timeout_ms: u64,
    },
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn clap_command() -> clap::Command {
        <Self as clap::CommandFactory>::command()
    }
}
