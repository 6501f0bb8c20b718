use k8s_openapi::api::core::v1 as k8s;

#[derive(Clone, Debug)]
pub struct Container {
    pub name: String,
    pub image: String,
    pub ports: Vec<i32>,
    pub env: Vec<SecretEnvVar>,
}

impl Container {
    pub fn new(name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
            ports: Vec::new(),
            env: Vec::new(),
        }
    }

    pub fn port(mut self, port: i32) -> Self {
        self.ports.push(port);
        self
    }

    /// Exposes `key` of secret `secret_name` as the variable `name`.
    pub fn env_from_secret(
        mut self,
        name: impl Into<String>,
        secret_name: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        self.env.push(SecretEnvVar {
            name: name.into(),
            secret_name: secret_name.into(),
            key: key.into(),
        });
        self
    }

    pub fn into_k8s(self) -> k8s::Container {
        k8s::Container {
            name: self.name,
            image: Some(self.image),
            ports: if self.ports.is_empty() {
                None
            } else {
                Some(
                    self.ports
                        .into_iter()
                        .map(|container_port| k8s::ContainerPort {
                            container_port,
                            ..Default::default()
                        })
                        .collect(),
                )
            },
            env: if self.env.is_empty() {
                None
            } else {
                Some(self.env.into_iter().map(|e| e.into_k8s()).collect())
            },
            ..Default::default()
        }
    }
}

#[derive(Clone, Debug)]
pub struct SecretEnvVar {
    pub name: String,
    pub secret_name: String,
    pub key: String,
}

impl SecretEnvVar {
    pub fn into_k8s(self) -> k8s::EnvVar {
        k8s::EnvVar {
            name: self.name,
            value: None,
            value_from: Some(k8s::EnvVarSource {
                secret_key_ref: Some(k8s::SecretKeySelector {
                    name: self.secret_name,
                    key: self.key,
                    optional: None,
                }),
                ..Default::default()
            }),
        }
    }
}
