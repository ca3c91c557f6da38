// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{Result, anyhow};
use clap::{ArgMatches, Command};
use codemap_diagnostic::{ColorConfig, Emitter};
use colored::Colorize;

use common::env::SystemEnvironment;
use core_model::service::ServiceModel;
use core_model_builder::{descriptor::DescriptorSource, error::ModelBuildingError};
use service_model_builder::{
    BuildOptions, ModelerConfig, build_from_interface, build_from_interface_with_binding,
};

use crate::descriptor_file::{DescriptorFile, load_binding};

use super::command::{
    CommandDefinition, binding_arg, binding_id_arg, descriptor_file_arg, get, get_required,
    output_arg, port_name_arg, service_name_arg,
};

pub struct BuildCommandDefinition {}

impl CommandDefinition for BuildCommandDefinition {
    fn command(&self) -> clap::Command {
        Command::new("build")
            .about("Build the service model of an interface and print it as JSON")
            .arg(descriptor_file_arg())
            .arg(binding_arg())
            .arg(service_name_arg())
            .arg(port_name_arg())
            .arg(binding_id_arg())
            .arg(output_arg())
    }

    fn execute(&self, matches: &ArgMatches) -> Result<()> {
        let descriptor: PathBuf = get_required(matches, "descriptor")?;
        let binding: Option<PathBuf> = get(matches, "binding");
        let output: Option<PathBuf> = get(matches, "output");

        let options = BuildOptions {
            service_name: get(matches, "service-name"),
            port_name: get(matches, "port-name"),
            binding_id: get(matches, "binding-id"),
            config: ModelerConfig::from_env(&SystemEnvironment)?,
        };

        let model = build(&descriptor, binding.as_deref(), &options).inspect_err(|e| {
            if let Some(e) = e.downcast_ref::<ModelBuildingError>() {
                emit_diagnostics(e);
            }
        })?;

        let serialized = serde_json::to_string_pretty(&model)?;

        match output {
            Some(path) => {
                let mut out_file = BufWriter::new(File::create(&path).map_err(|e| {
                    anyhow!("Could not create the output file {}: {}", path.display(), e)
                })?);
                writeln!(out_file, "{serialized}")?;
                out_file.flush()?;
                eprintln!(
                    "{}",
                    format!("Service model written to {}", path.display()).green()
                );
            }
            None => println!("{serialized}"),
        }

        Ok(())
    }
}

fn build(
    descriptor: &Path,
    binding: Option<&Path>,
    options: &BuildOptions,
) -> Result<ServiceModel> {
    let (source, known_types) = DescriptorFile::load(descriptor)?.into_parts();
    tracing::debug!(
        "Loaded interface '{}' from {}",
        source.interface().name,
        descriptor.display()
    );

    let model = match binding {
        Some(binding) => {
            let mut binding = load_binding(binding)?;
            build_from_interface_with_binding(&source, &known_types, options, &mut binding)?
        }
        None => build_from_interface(&source, &known_types, options)?,
    };

    Ok(model)
}

fn emit_diagnostics(err: &ModelBuildingError) {
    if let ModelBuildingError::DuplicateOperationName { diagnostics, .. } = err {
        let mut emitter = Emitter::stderr(ColorConfig::Auto, None);
        emitter.emit(diagnostics);
    }
}
