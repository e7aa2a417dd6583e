use std::{
    fs::File,
    io::{BufWriter, IntoInnerError, Write},
    path::Path,
};

use log::debug;

use super::Real;
use crate::{error::Result, model::Model, parameter::KernelType};

/// Writes `model` in the line-oriented text format.
///
/// # Arguments
/// * `out` - The destination, flushed before returning.
/// * `model` - The model to serialize.
///
/// # Returns
/// An error if any write or the final flush fails.
pub fn write_model<W: Write>(mut out: W, model: &Model) -> Result<()> {
    let param = &model.param;

    writeln!(out, "svm_type {}", param.svm_type)?;
    writeln!(out, "kernel_type {}", param.kernel_type)?;

    if param.kernel_type == KernelType::Polynomial {
        writeln!(out, "degree {}", param.degree)?;
    }

    if param.kernel_type.uses_gamma() {
        writeln!(out, "gamma {}", Real(param.gamma))?;
    }

    if param.kernel_type.uses_coef0() {
        writeln!(out, "coef0 {}", Real(param.coef0))?;
    }

    if model.dim > 0 {
        writeln!(out, "dim {}", model.dim)?;
    }

    out.write_all(b"w")?;
    for w in &model.w {
        write!(out, " {}", Real(*w))?;
    }
    out.write_all(b"\n")?;

    out.flush()?;
    Ok(())
}

/// Saves `model` to the file at `path`, replacing it if it exists.
///
/// # Arguments
/// * `path` - The destination file.
/// * `model` - The model to serialize.
///
/// # Returns
/// An error if the file can't be created, written or synced to disk.
pub fn save_model<P: AsRef<Path>>(path: P, model: &Model) -> Result<()> {
    let path = path.as_ref();
    let mut out = BufWriter::new(File::create(path)?);
    write_model(&mut out, model)?;

    // Surface errors the OS only reports when the data reaches the disk.
    let file = out.into_inner().map_err(IntoInnerError::into_error)?;
    file.sync_all()?;

    debug!("model saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameter::{Parameter, SvmType};

    fn written(model: &Model) -> String {
        let mut out = Vec::new();
        write_model(&mut out, model).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn linear_model() {
        let mut model = Model::new(Parameter::default(), 3);
        model.w = vec![0.5, -1., 0.1];

        assert_eq!(
            written(&model),
            "svm_type b_svc\nkernel_type linear\ndim 3\nw 0.5 -1 0.10000000000000001\n"
        );
    }

    #[test]
    fn kernel_fields_follow_the_kernel() {
        let param = Parameter {
            svm_type: SvmType::EpsilonSvr,
            kernel_type: KernelType::Polynomial,
            degree: 2,
            gamma: 0.5,
            coef0: 1.,
            ..Default::default()
        };
        let model = Model::new(param.clone(), 1);

        assert_eq!(
            written(&model),
            "svm_type epsilon_svr\nkernel_type polynomial\ndegree 2\ngamma 0.5\ncoef0 1\ndim 1\nw 0\n"
        );

        let param = Parameter {
            kernel_type: KernelType::Rbf,
            ..param
        };
        let model = Model::new(param, 1);
        assert_eq!(
            written(&model),
            "svm_type epsilon_svr\nkernel_type rbf\ngamma 0.5\ndim 1\nw 0\n"
        );
    }

    #[test]
    fn empty_model_skips_dim() {
        let model = Model::new(Parameter::default(), 0);
        assert_eq!(written(&model), "svm_type b_svc\nkernel_type linear\nw\n");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn failed_write_back_is_reported() {
        let mut model = Model::new(Parameter::default(), 4096);
        model.w.fill(0.1);

        assert!(matches!(
            save_model("/dev/full", &model),
            Err(crate::error::SvmErr::Io(_))
        ));
    }

    #[test]
    fn unwritable_destination_fails() {
        let model = Model::new(Parameter::default(), 1);
        let path = std::env::temp_dir()
            .join("hogwild-svm-missing-dir")
            .join("model.txt");

        assert!(save_model(path, &model).is_err());
    }
}
