mod temp_artifacts;

pub use temp_artifacts::TempArtifacts;
