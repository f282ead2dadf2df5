use super::ShapeGeometry;
use crate::element::SceneElement;
use crate::screen::{Screen, ShaderProgram};

/// Activates a shader for the elements that follow, until the matching [`ShaderPop`].
#[derive(Debug, Clone, PartialEq)]
pub struct ShaderPush {
    program: ShaderProgram,
}

impl ShaderPush {
    pub fn new(program: ShaderProgram) -> Self {
        Self { program }
    }

    pub fn program(&self) -> &ShaderProgram {
        &self.program
    }
}

impl ShapeGeometry for ShaderPush {
    fn render(&self, _element: &SceneElement, screen: &mut dyn Screen) {
        screen.push_shader(&self.program);
    }

    fn always_displayed(&self) -> bool {
        true
    }
}

/// Restores the shader active before the last [`ShaderPush`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ShaderPop;

impl ShapeGeometry for ShaderPop {
    fn render(&self, _element: &SceneElement, screen: &mut dyn Screen) {
        screen.pop_shader();
    }

    fn always_displayed(&self) -> bool {
        true
    }
}
