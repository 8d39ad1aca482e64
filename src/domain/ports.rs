use crate::domain::model::{
    CurveDescriptor, ImportSummary, MaterialDescriptor, MaterialHandle, Modifier, ObjectHandle,
    StrokeRecord,
};
use crate::utils::error::Result;

/// 3D 場景宿主：負責實際建立曲線、材質並連結到場景
pub trait SceneHost {
    fn create_curve_object(&mut self, curve: &CurveDescriptor) -> Result<ObjectHandle>;
    fn create_material(&mut self, material: &MaterialDescriptor) -> Result<MaterialHandle>;
    fn link_object(&mut self, object: ObjectHandle) -> Result<()>;
    fn add_modifier(&mut self, object: ObjectHandle, modifier: &Modifier) -> Result<()>;
    /// 指定為物件的第一個材質槽，已有材質時覆蓋
    fn assign_material(&mut self, object: ObjectHandle, material: MaterialHandle) -> Result<()>;
}

pub trait Storage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait Pipeline {
    fn extract(&mut self) -> Result<Vec<StrokeRecord>>;
    fn transform(&mut self, records: Vec<StrokeRecord>) -> Result<Vec<CurveDescriptor>>;
    fn load(&mut self, curves: Vec<CurveDescriptor>) -> Result<ImportSummary>;
}
