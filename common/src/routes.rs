//! Tabela de rotas da navegação lateral

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: &'static str,
}

pub const ROUTES: &[Route] = &[
    Route {
        label: "Chamados",
        path: "/chamados",
        icon: "headset",
    },
    Route {
        label: "Postos de Trabalho",
        path: "/workstation",
        icon: "building",
    },
    Route {
        label: "Cidades",
        path: "/cidades",
        icon: "map",
    },
    Route {
        label: "Categorias",
        path: "/categorias",
        icon: "tags",
    },
    Route {
        label: "Problemas",
        path: "/problemas",
        icon: "wrench",
    },
    Route {
        label: "Usuários",
        path: "/usuarios",
        icon: "users",
    },
];

pub const LOGIN_PATH: &str = "/login";

pub fn find_route(path: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|r| r.path == path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_route() {
        assert_eq!(find_route("/cidades").map(|r| r.label), Some("Cidades"));
        assert!(find_route("/nada").is_none());
    }

    #[test]
    fn test_labels_are_unique() {
        let mut labels: Vec<_> = ROUTES.iter().map(|r| r.label).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), ROUTES.len());
    }
}
