use strum::Display;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Scene {
    #[strum(to_string = "Main Menu")]
    MainMenu,
    #[strum(to_string = "Tree Screen")]
    TreeScreen,
    #[strum(to_string = "Stump Screen")]
    StumpScreen,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("{action} is not available on the {scene}")]
    NotAvailable { action: &'static str, scene: Scene },
    #[error("application has exited")]
    Exited,
}

/// Screen the user is on, plus the options panel overlay on the main menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    scene: Scene,
    options_open: bool,
    exited: bool,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            scene: Scene::MainMenu,
            options_open: false,
            exited: false,
        }
    }

    pub fn scene(&self) -> Scene {
        self.scene
    }

    pub fn options_open(&self) -> bool {
        self.options_open
    }

    pub fn has_exited(&self) -> bool {
        self.exited
    }

    pub fn open_tree_calculator(&mut self) -> Result<Scene, NavigationError> {
        self.require_main_menu("opening the tree calculator")?;
        self.load(Scene::TreeScreen)
    }

    pub fn open_stump_calculator(&mut self) -> Result<Scene, NavigationError> {
        self.require_main_menu("opening the stump calculator")?;
        self.load(Scene::StumpScreen)
    }

    pub fn back_to_main_menu(&mut self) -> Result<Scene, NavigationError> {
        self.require_running()?;
        if self.scene == Scene::MainMenu {
            return Err(NavigationError::NotAvailable {
                action: "going back",
                scene: self.scene,
            });
        }
        self.load(Scene::MainMenu)
    }

    pub fn open_options(&mut self) -> Result<(), NavigationError> {
        self.require_main_menu("opening options")?;
        self.options_open = true;
        log::debug!("Options panel opened");
        Ok(())
    }

    pub fn close_options(&mut self) -> Result<(), NavigationError> {
        self.require_main_menu("closing options")?;
        self.options_open = false;
        log::debug!("Options panel closed");
        Ok(())
    }

    pub fn exit(&mut self) {
        self.exited = true;
        log::info!("Exiting from {}", self.scene);
    }

    /// A freshly loaded scene always starts with the options panel hidden.
    fn load(&mut self, scene: Scene) -> Result<Scene, NavigationError> {
        log::info!("Loading scene {scene}");
        self.scene = scene;
        self.options_open = false;
        Ok(scene)
    }

    fn require_running(&self) -> Result<(), NavigationError> {
        if self.exited {
            Err(NavigationError::Exited)
        } else {
            Ok(())
        }
    }

    fn require_main_menu(&self, action: &'static str) -> Result<(), NavigationError> {
        self.require_running()?;
        if self.scene != Scene::MainMenu {
            return Err(NavigationError::NotAvailable {
                action,
                scene: self.scene,
            });
        }
        Ok(())
    }
}
