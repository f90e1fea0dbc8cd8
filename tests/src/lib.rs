//! End-to-end tests for the EHR extract parser.
//!
//! The fixtures mirror a small hospital export: two patients with interleaved
//! lab histories. Every test writes them to a fresh temporary directory and
//! parses them back from disk.

use std::io;
use std::path::{Path, PathBuf};

/// Patient extract with two patients.
pub const PATIENT_FILE: &str = "PatientID\tPatientGender\tPatientDateOfBirth\tPatientRace\t\
PatientMaritalStatus\tPatientLanguage\tPatientPopulationPercentageBelowPoverty\n\
0BC491C5-5A45-4067-BD11-A78BEA00D3BE\tFemale\t1921-04-18 01:56:01.807\tUnknown\tMarried\tEnglish\t18.05\n\
016A590E-D093-4667-A5DA-D68EA6987D93\tMale\t1960-12-06 06:37:05.640\tWhite\tUnknown\tEnglish\t15.02\n";

/// Lab extract for the two patients, in admission-export order.
pub const LABS_FILE: &str = "PatientID\tAdmissionID\tLabName\tLabValue\tLabUnits\tLabDateTime\n\
016A590E-D093-4667-A5DA-D68EA6987D93\t1\tMETABOLIC: CREATININE\t0.5\tmg/dL\t1986-12-05 17:46:42.850\n\
016A590E-D093-4667-A5DA-D68EA6987D93\t1\tMETABOLIC: CREATININE\t0.9\tmg/dL\t1986-12-06 04:11:32.937\n\
0BC491C5-5A45-4067-BD11-A78BEA00D3BE\t1\tMETABOLIC: CREATININE\t0.5\tmg/dL\t1941-11-15 01:43:03.937\n\
0BC491C5-5A45-4067-BD11-A78BEA00D3BE\t2\tMETABOLIC: CREATININE\t1.2\tmg/dL\t2008-05-30 02:42:39.240\n\
016A590E-D093-4667-A5DA-D68EA6987D93\t5\tURINALYSIS: RED BLOOD CELLS\t3.5\trbc/hpf\t2008-02-26 05:38:56.980\n\
016A590E-D093-4667-A5DA-D68EA6987D93\t4\tURINALYSIS: RED BLOOD CELLS\t0.2\trbc/hpf\t2001-03-20 21:28:32.137\n\
0BC491C5-5A45-4067-BD11-A78BEA00D3BE\t2\tURINALYSIS: RED BLOOD CELLS\t3.3\trbc/hpf\t2008-05-21 06:51:12.250\n\
0BC491C5-5A45-4067-BD11-A78BEA00D3BE\t1\tURINALYSIS: RED BLOOD CELLS\t0.1\trbc/hpf\t1941-11-15 08:04:26.190\n\
016A590E-D093-4667-A5DA-D68EA6987D93\t1\tCBC: WHITE BLOOD CELL COUNT\t9.2\tk/cumm\t1986-11-30 20:32:15.443\n";

/// Write a patient and a lab extract into `dir`, returning their paths.
pub fn write_extracts(dir: &Path, patients: &str, labs: &str) -> io::Result<(PathBuf, PathBuf)> {
    let patient_path = dir.join("test_patients.txt");
    let lab_path = dir.join("test_labs.txt");
    std::fs::write(&patient_path, patients)?;
    std::fs::write(&lab_path, labs)?;
    Ok((patient_path, lab_path))
}

#[cfg(test)]
mod acceptance;
#[cfg(test)]
mod failures;
