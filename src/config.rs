use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Other,
}
impl Platform {
    pub fn from_family(family: &str) -> Self {
        match family {
            "windows" => Self::Windows,
            _ => Self::Other,
        }
    }
    pub fn current() -> Self {
        Self::from_family(std::env::consts::FAMILY)
    }
}

pub fn compiler_executable(platform: Platform) -> &'static str {
    match platform {
        Platform::Windows => "glslangValidator.exe",
        Platform::Other => "glslangValidator",
    }
}

/// Settings resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub compiler: PathBuf,
}
impl Config {
    pub fn from_platform(platform: Platform) -> Self {
        Self {
            compiler: PathBuf::from(compiler_executable(platform)),
        }
    }
}
impl Default for Config {
    fn default() -> Self {
        Self::from_platform(Platform::current())
    }
}
