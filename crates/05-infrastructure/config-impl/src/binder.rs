//! 配置请求绑定器实现

use aware_config::{ConfigRequest, ConfigRequestOptions};
use config::{Config, Environment, File, FileFormat};
use infrastructure_common::ConfigError;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// 环境变量层级分隔符
pub const ENV_SEPARATOR: &str = "__";

#[derive(Debug, Clone)]
enum RequestSource {
    File { path: PathBuf, required: bool },
    Inline { content: String, format: FileFormat },
}

/// 配置请求绑定器
///
/// 按注册顺序合并配置源，后注册的覆盖先注册的，环境变量总是最后合并。
/// 合并结果反序列化为 [`ConfigRequestOptions`] 后经构建器校验。
///
/// ```no_run
/// use config_impl::ConfigRequestBinder;
///
/// let request = ConfigRequestBinder::new()
///     .add_file("config/aware.toml")?
///     .with_env_prefix("AWARE")
///     .with_section("aware")
///     .bind()?;
/// # Ok::<(), infrastructure_common::ConfigError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigRequestBinder {
    /// 配置源列表
    sources: Vec<RequestSource>,
    /// 环境变量前缀
    env_prefix: Option<String>,
    /// 替代进程环境的变量表
    env_source: Option<HashMap<String, String>>,
    /// 配置节路径
    section: Option<String>,
}

impl ConfigRequestBinder {
    /// 创建新的绑定器
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加必需的配置文件，格式由扩展名推断
    pub fn add_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            });
        }

        info!("添加配置文件: {}", path.display());
        self.sources.push(RequestSource::File {
            path: path.to_path_buf(),
            required: true,
        });
        Ok(self)
    }

    /// 添加可选的配置文件，文件不存在时跳过
    pub fn add_optional_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        let path = path.as_ref();
        debug!("添加可选配置文件: {}", path.display());
        self.sources.push(RequestSource::File {
            path: path.to_path_buf(),
            required: false,
        });
        self
    }

    /// 添加内存中的配置文档
    pub fn add_str(mut self, content: impl Into<String>, format: FileFormat) -> Self {
        debug!("添加内联配置: {:?}", format);
        self.sources.push(RequestSource::Inline {
            content: content.into(),
            format,
        });
        self
    }

    /// 启用环境变量配置源
    ///
    /// 前缀为 `AWARE` 时 `AWARE_MASTER_PREFERENCE` 对应 `master_preference`，
    /// 层级之间用 `__` 分隔，例如 `AWARE_AWARE__CLUSTER_LOW` 对应 `aware.cluster_low`。
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        info!("添加环境变量配置源，前缀: {}", prefix);
        self.env_prefix = Some(prefix);
        self
    }

    /// 用给定的变量表代替进程环境变量
    pub fn with_env_source(mut self, vars: HashMap<String, String>) -> Self {
        self.env_source = Some(vars);
        self
    }

    /// 从指定配置节读取，未设置时读取根节点
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    /// 合并所有配置源并构建已校验的 [`ConfigRequest`]
    pub fn bind(&self) -> Result<ConfigRequest, ConfigError> {
        let options = self.bind_options()?;
        let request = ConfigRequest::try_from(options)?;
        info!(%request, "配置请求绑定成功");
        Ok(request)
    }

    /// 合并所有配置源，返回未校验的原始选项
    pub fn bind_options(&self) -> Result<ConfigRequestOptions, ConfigError> {
        let settings = self.build_settings()?;

        let options = match &self.section {
            Some(section) => settings.get::<ConfigRequestOptions>(section),
            None => settings.try_deserialize::<ConfigRequestOptions>(),
        }
        .map_err(|e| {
            error!("配置绑定失败: section={:?}, error={}", self.section, e);
            match e {
                config::ConfigError::NotFound(key) => ConfigError::KeyNotFound { key },
                other => ConfigError::parse_error(other),
            }
        })?;

        debug!(?options, "配置选项反序列化完成");
        Ok(options)
    }

    fn build_settings(&self) -> Result<Config, ConfigError> {
        let mut builder = Config::builder();

        for source in &self.sources {
            builder = match source {
                RequestSource::File { path, required } => {
                    builder.add_source(File::from(path.as_path()).required(*required))
                }
                RequestSource::Inline { content, format } => {
                    builder.add_source(File::from_str(content, *format))
                }
            };
        }

        if let Some(prefix) = &self.env_prefix {
            let environment = Environment::with_prefix(prefix)
                .prefix_separator("_")
                .separator(ENV_SEPARATOR)
                .try_parsing(true)
                .source(self.env_source.clone());
            builder = builder.add_source(environment);
        }

        builder.build().map_err(|e| {
            error!("配置构建失败: {}", e);
            ConfigError::parse_error(e)
        })
    }
}
